use super::{
    ast::{Context, Expr},
    error::{Error, Result},
};

#[derive(Debug, PartialEq)]
enum Type {
    Int,
    Bool,
}

fn type_of(context: Context, expr: &Expr) -> Result<Type> {
    match expr {
        Expr::Field(name) => match context.field_index(name) {
            Some(_) => Ok(Type::Int),
            None => Err(Error::UnknownField(context, name.clone())),
        },
        Expr::Int(_) => Ok(Type::Int),
        Expr::Bool(_) => Ok(Type::Bool),
        Expr::And(arg1, arg2) | Expr::Or(arg1, arg2) => {
            expect(context, arg1, Type::Bool)?;
            expect(context, arg2, Type::Bool)?;
            Ok(Type::Bool)
        }
        Expr::Not(arg1) => {
            expect(context, arg1, Type::Bool)?;
            Ok(Type::Bool)
        }
        Expr::Cmp(_, arg1, arg2) => {
            expect(context, arg1, Type::Int)?;
            expect(context, arg2, Type::Int)?;
            Ok(Type::Bool)
        }
        Expr::Mod(arg1, arg2) => {
            expect(context, arg1, Type::Int)?;
            expect(context, arg2, Type::Int)?;
            Ok(Type::Int)
        }
    }
}

fn expect(context: Context, expr: &Expr, typ: Type) -> Result<()> {
    if type_of(context, expr)? == typ {
        Ok(())
    } else {
        Err(Error::TypeError(format!("{:?}", expr)))
    }
}

/// Checks that `expr` is a boolean over the fields of `context`.
pub fn check(expr: &Expr, context: Context) -> Result<()> {
    expect(context, expr, Type::Bool)
}
