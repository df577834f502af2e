use super::{
    ast::{CmpOp, Expr},
    error::{Error, Result},
};
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct FilterParser;

/// Parses a filter expression such as `vlabel == 2 && vid % 2 != 0`.
pub fn parse(input: &str) -> Result<Expr> {
    match FilterParser::parse(Rule::filter, input)?.next() {
        Some(pair) if pair.as_rule() != Rule::EOI => parse_expr(pair),
        _ => unreachable!(),
    }
}

fn parse_expr(pair: Pair<Rule>) -> Result<Expr> {
    match pair.as_rule() {
        Rule::or_expr => fold(pair, Expr::Or),
        Rule::and_expr => fold(pair, Expr::And),
        Rule::mod_expr => fold(pair, Expr::Mod),
        Rule::not_expr => {
            let inner = pair.into_inner().next().unwrap();
            match inner.as_rule() {
                Rule::not_expr => Ok(Expr::Not(Box::new(parse_expr(inner)?))),
                _ => parse_expr(inner),
            }
        }
        Rule::cmp_expr => {
            let mut pairs = pair.into_inner();
            let lhs = parse_expr(pairs.next().unwrap())?;
            match (pairs.next(), pairs.next()) {
                (Some(op), Some(rhs)) => Ok(Expr::Cmp(
                    parse_cmp_op(op.as_str()),
                    Box::new(lhs),
                    Box::new(parse_expr(rhs)?),
                )),
                _ => Ok(lhs),
            }
        }
        Rule::bool => Ok(Expr::Bool(pair.as_str() == "true")),
        Rule::int => pair
            .as_str()
            .parse()
            .map(Expr::Int)
            .map_err(|_| Error::IntOutOfRange(pair.as_str().to_owned())),
        Rule::field => Ok(Expr::Field(pair.as_str().to_owned())),
        _ => unreachable!(),
    }
}

/// Left-folds the operands of a binary operator chain.
fn fold(pair: Pair<Rule>, op: fn(Box<Expr>, Box<Expr>) -> Expr) -> Result<Expr> {
    let mut pairs = pair.into_inner();
    let mut acc = parse_expr(pairs.next().unwrap())?;
    for pair in pairs {
        acc = op(Box::new(acc), Box::new(parse_expr(pair)?));
    }
    Ok(acc)
}

fn parse_cmp_op(op: &str) -> CmpOp {
    match op {
        "==" => CmpOp::Eq,
        "!=" => CmpOp::Neq,
        "<" => CmpOp::Lt,
        "<=" => CmpOp::Le,
        ">" => CmpOp::Gt,
        ">=" => CmpOp::Ge,
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> Box<Expr> {
        Box::new(Expr::Field(String::from(name)))
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse("true"), Ok(Expr::Bool(true)));
        assert_eq!(parse(" -42 "), Ok(Expr::Int(-42)));
        assert_eq!(parse("trueish"), Ok(Expr::Field(String::from("trueish"))));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            parse("vid % 2 == 0 || vlabel < 3 && !(vid >= 10)"),
            Ok(Expr::Or(
                Box::new(Expr::Cmp(
                    CmpOp::Eq,
                    Box::new(Expr::Mod(field("vid"), Box::new(Expr::Int(2)))),
                    Box::new(Expr::Int(0)),
                )),
                Box::new(Expr::And(
                    Box::new(Expr::Cmp(CmpOp::Lt, field("vlabel"), Box::new(Expr::Int(3)))),
                    Box::new(Expr::Not(Box::new(Expr::Cmp(
                        CmpOp::Ge,
                        field("vid"),
                        Box::new(Expr::Int(10)),
                    )))),
                )),
            ))
        );
    }

    #[test]
    fn test_left_assoc() {
        assert_eq!(
            parse("a && b && c"),
            Ok(Expr::And(
                Box::new(Expr::And(field("a"), field("b"))),
                field("c")
            ))
        );
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse("vid =="), Err(Error::ParseError(_))));
        assert!(matches!(parse("1 2"), Err(Error::ParseError(_))));
        assert_eq!(
            parse("99999999999999999999"),
            Err(Error::IntOutOfRange(String::from("99999999999999999999")))
        );
    }
}
