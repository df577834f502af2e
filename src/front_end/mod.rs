//! The filter-expression language used by the command line.
//!
//! An expression is parsed, type checked against the fields of its
//! [`Context`], simplified, then compiled to a closure over a record of
//! `i64` fields.

pub use ast::{CmpOp, Context, Expr};
pub use checker::check;
pub use parser::{parse, Rule};
pub use rewriter::rewrite;

pub(crate) use codegen::emit_constraint;

pub mod error;
pub mod types;

mod ast;
mod checker;
mod codegen;
mod parser;
mod rewriter;

use error::Result;
use log::debug;
use types::Constraint;

/// Parses, checks and compiles `input` for the given context.
pub fn compile(input: &str, context: Context) -> Result<Constraint> {
    let expr = parse(input)?;
    check(&expr, context)?;
    let expr = rewrite(expr);
    debug!("compiled {} filter `{}` to {:?}", context, input, expr);
    Ok(emit_constraint(&expr, context))
}
