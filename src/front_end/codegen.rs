use super::{
    ast::{CmpOp, Context, Expr},
    types::Constraint,
};

/// `Expr` with field names resolved to record offsets.
enum Code {
    Field(usize),
    Int(i64),
    Bool(bool),
    And(Box<Code>, Box<Code>),
    Or(Box<Code>, Box<Code>),
    Not(Box<Code>),
    Cmp(CmpOp, Box<Code>, Box<Code>),
    Mod(Box<Code>, Box<Code>),
}

fn lower(expr: &Expr, context: Context) -> Code {
    let lower2 = |arg1: &Expr, arg2: &Expr| {
        (
            Box::new(lower(arg1, context)),
            Box::new(lower(arg2, context)),
        )
    };
    match expr {
        Expr::Field(name) => Code::Field(
            context
                .field_index(name)
                .unwrap_or_else(|| unreachable!("unchecked field `{}`", name)),
        ),
        &Expr::Int(x) => Code::Int(x),
        &Expr::Bool(x) => Code::Bool(x),
        Expr::And(arg1, arg2) => {
            let (x, y) = lower2(arg1, arg2);
            Code::And(x, y)
        }
        Expr::Or(arg1, arg2) => {
            let (x, y) = lower2(arg1, arg2);
            Code::Or(x, y)
        }
        Expr::Not(arg1) => Code::Not(Box::new(lower(arg1, context))),
        Expr::Cmp(op, arg1, arg2) => {
            let (x, y) = lower2(arg1, arg2);
            Code::Cmp(*op, x, y)
        }
        Expr::Mod(arg1, arg2) => {
            let (x, y) = lower2(arg1, arg2);
            Code::Mod(x, y)
        }
    }
}

/// Evaluates an integer term; `None` when a modulo has no defined result.
fn eval_int(code: &Code, env: &[i64]) -> Option<i64> {
    match code {
        &Code::Field(i) => Some(env[i]),
        &Code::Int(x) => Some(x),
        Code::Mod(arg1, arg2) => eval_int(arg1, env)?.checked_rem(eval_int(arg2, env)?),
        _ => unreachable!(),
    }
}

/// Evaluates a boolean term. A comparison with an undefined operand is false.
fn eval_bool(code: &Code, env: &[i64]) -> bool {
    match code {
        &Code::Bool(x) => x,
        Code::And(arg1, arg2) => eval_bool(arg1, env) && eval_bool(arg2, env),
        Code::Or(arg1, arg2) => eval_bool(arg1, env) || eval_bool(arg2, env),
        Code::Not(arg1) => !eval_bool(arg1, env),
        Code::Cmp(op, arg1, arg2) => match (eval_int(arg1, env), eval_int(arg2, env)) {
            (Some(x), Some(y)) => op.apply(x, y),
            _ => false,
        },
        _ => unreachable!(),
    }
}

/// Compiles a checked expression into a constraint over `context` records.
pub fn emit_constraint(expr: &Expr, context: Context) -> Constraint {
    let code = lower(expr, context);
    Constraint::new(
        context,
        expr.clone(),
        Box::new(move |record: &[i64]| eval_bool(&code, record)),
    )
}
