use super::ast::Expr;

fn rewrite_and(arg1: Expr, arg2: Expr) -> Expr {
    match (rewrite(arg1), rewrite(arg2)) {
        (Expr::Bool(false), _) | (_, Expr::Bool(false)) => Expr::Bool(false),
        (Expr::Bool(true), x) | (x, Expr::Bool(true)) => x,
        (x, y) => Expr::And(Box::new(x), Box::new(y)),
    }
}

fn rewrite_or(arg1: Expr, arg2: Expr) -> Expr {
    match (rewrite(arg1), rewrite(arg2)) {
        (Expr::Bool(true), _) | (_, Expr::Bool(true)) => Expr::Bool(true),
        (Expr::Bool(false), x) | (x, Expr::Bool(false)) => x,
        (x, y) => Expr::Or(Box::new(x), Box::new(y)),
    }
}

/// Whether an integer term has a value for every record; `%` may not.
fn is_total(expr: &Expr) -> bool {
    match expr {
        Expr::Mod(x, y) => is_total(x) && matches!(**y, Expr::Int(z) if z != 0 && z != -1),
        _ => true,
    }
}

fn rewrite_not(arg1: Expr) -> Expr {
    match rewrite(arg1) {
        Expr::Bool(x) => Expr::Bool(!x),
        Expr::Not(x) => *x,
        Expr::Cmp(op, x, y) if is_total(&x) && is_total(&y) => Expr::Cmp(op.negate(), x, y),
        x => Expr::Not(Box::new(x)),
    }
}

/// Folds constants and pushes negation into comparisons whose operands
/// always have a value.
///
/// Only applied to checked expressions, so every operand already has the
/// type its operator expects.
pub fn rewrite(expr: Expr) -> Expr {
    match expr {
        Expr::And(arg1, arg2) => rewrite_and(*arg1, *arg2),
        Expr::Or(arg1, arg2) => rewrite_or(*arg1, *arg2),
        Expr::Not(arg1) => rewrite_not(*arg1),
        Expr::Cmp(op, arg1, arg2) => match (rewrite(*arg1), rewrite(*arg2)) {
            (Expr::Int(x), Expr::Int(y)) => Expr::Bool(op.apply(x, y)),
            (x, y) => Expr::Cmp(op, Box::new(x), Box::new(y)),
        },
        Expr::Mod(arg1, arg2) => match (rewrite(*arg1), rewrite(*arg2)) {
            (Expr::Int(x), Expr::Int(y)) => match x.checked_rem(y) {
                Some(z) => Expr::Int(z),
                None => Expr::Mod(Box::new(Expr::Int(x)), Box::new(Expr::Int(y))),
            },
            (x, y) => Expr::Mod(Box::new(x), Box::new(y)),
        },
        _ => expr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_end::parse;

    fn rw(input: &str) -> Expr {
        rewrite(parse(input).unwrap())
    }

    #[test]
    fn test_constants() {
        assert_eq!(rw("true && vid == 1"), parse("vid == 1").unwrap());
        assert_eq!(rw("vid == 1 || 7 % 2 == 1"), Expr::Bool(true));
        assert_eq!(rw("vid == 1 && false"), Expr::Bool(false));
        assert_eq!(rw("!!(vid < 1)"), parse("vid < 1").unwrap());
    }

    #[test]
    fn test_negated_comparison() {
        assert_eq!(rw("!(vid < 1)"), parse("vid >= 1").unwrap());
        assert_eq!(rw("!(src == dst)"), parse("src != dst").unwrap());
    }

    #[test]
    fn test_mod_by_zero_kept() {
        assert_eq!(rw("1 % 0 == 0"), parse("1 % 0 == 0").unwrap());
        assert_eq!(
            rw("-9223372036854775808 % -1 == 0"),
            parse("-9223372036854775808 % -1 == 0").unwrap()
        );
    }

    #[test]
    fn test_negated_mod_kept() {
        assert_eq!(
            rw("!(vid % vlabel == 0)"),
            parse("!(vid % vlabel == 0)").unwrap()
        );
        assert_eq!(
            rw("!(vid % vlabel % 2 == 0)"),
            parse("!(vid % vlabel % 2 == 0)").unwrap()
        );
        assert_eq!(rw("!(vid % 2 == 0)"), parse("vid % 2 != 0").unwrap());
    }
}
