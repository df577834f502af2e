use super::{ast::Context, codegen::emit_constraint, Expr};
use derive_more::AsRef;

/// A compiled filter expression.
///
/// The closure reads a record laid out as [`Context::fields`]; the source
/// expression is kept alongside for display, equality and cloning.
#[derive(Debug)]
pub struct Constraint {
    context: Context,
    expr: Expr,
    f: ConstraintF,
}

impl Constraint {
    pub fn new(context: Context, expr: Expr, f: Box<dyn Fn(&[i64]) -> bool>) -> Self {
        Self {
            context,
            expr,
            f: ConstraintF(f),
        }
    }

    pub fn context(&self) -> Context {
        self.context
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn f(&self) -> &dyn Fn(&[i64]) -> bool {
        self.f.as_ref()
    }

    pub fn test(&self, record: &[i64]) -> bool {
        (self.f())(record)
    }
}

impl Clone for Constraint {
    fn clone(&self) -> Self {
        emit_constraint(&self.expr, self.context)
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.context == other.context && self.expr == other.expr
    }
}

#[derive(AsRef)]
struct ConstraintF(Box<dyn Fn(&[i64]) -> bool>);

impl std::fmt::Debug for ConstraintF {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:p}", self.0)
    }
}
