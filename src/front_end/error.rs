use super::{ast::Context, parser::Rule};
use derive_more::Display;

#[derive(Debug, Display, PartialEq)]
pub enum Error {
    #[display(fmt = "{}", _0)]
    ParseError(pest::error::Error<Rule>),
    #[display(fmt = "integer literal out of range: {}", _0)]
    IntOutOfRange(String),
    #[display(fmt = "unknown {} field `{}`", _0, _1)]
    UnknownField(Context, String),
    #[display(fmt = "type error in `{}`", _0)]
    TypeError(String),
}

impl std::error::Error for Error {}

impl From<pest::error::Error<Rule>> for Error {
    fn from(e: pest::error::Error<Rule>) -> Self {
        Error::ParseError(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
