use derive_more::Display;

/// A filter expression.
#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Field(String),
    Int(i64),
    Bool(bool),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
    Cmp(CmpOp, Box<Expr>, Box<Expr>),
    Mod(Box<Expr>, Box<Expr>),
}

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum CmpOp {
    #[display(fmt = "==")]
    Eq,
    #[display(fmt = "!=")]
    Neq,
    #[display(fmt = "<")]
    Lt,
    #[display(fmt = "<=")]
    Le,
    #[display(fmt = ">")]
    Gt,
    #[display(fmt = ">=")]
    Ge,
}

impl CmpOp {
    pub fn apply(self, x: i64, y: i64) -> bool {
        match self {
            CmpOp::Eq => x == y,
            CmpOp::Neq => x != y,
            CmpOp::Lt => x < y,
            CmpOp::Le => x <= y,
            CmpOp::Gt => x > y,
            CmpOp::Ge => x >= y,
        }
    }

    /// The operator `op'` such that `x op' y == !(x op y)`.
    pub fn negate(self) -> Self {
        match self {
            CmpOp::Eq => CmpOp::Neq,
            CmpOp::Neq => CmpOp::Eq,
            CmpOp::Lt => CmpOp::Ge,
            CmpOp::Le => CmpOp::Gt,
            CmpOp::Gt => CmpOp::Le,
            CmpOp::Ge => CmpOp::Lt,
        }
    }
}

/// What a filter expression is evaluated against.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum Context {
    #[display(fmt = "vertex")]
    Vertex,
    #[display(fmt = "edge")]
    Edge,
}

impl Context {
    /// The fields visible to an expression, in record order.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Context::Vertex => &["vid", "vlabel"],
            Context::Edge => &["src", "dst", "elabel", "capacity"],
        }
    }

    pub fn field_index(self, name: &str) -> Option<usize> {
        self.fields().iter().position(|&field| field == name)
    }
}
