// Display formatting for AST
use crate::ast::{Expr, Op};
use std::fmt;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(v) => write!(f, "{}", v),

            Expr::Var(name) => write!(f, "{}", name),

            Expr::Func(kind, arg) => write!(f, "{}({})", kind.name(), arg),

            Expr::Neg(inner) => {
                if matches!(**inner, Expr::BinOp(..)) {
                    write!(f, "-({})", inner)
                } else {
                    write!(f, "-{}", inner)
                }
            }

            Expr::BinOp(op, lhs, rhs) => {
                if needs_parens(lhs, *op, Side::Left) {
                    write!(f, "({})", lhs)?;
                } else {
                    write!(f, "{}", lhs)?;
                }
                write!(f, " {} ", op.symbol())?;
                if needs_parens(rhs, *op, Side::Right) {
                    write!(f, "({})", rhs)
                } else {
                    write!(f, "{}", rhs)
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Parenthesization rule for a binary operand: a child operator of
/// strictly lower precedence always wraps; on the right-hand side,
/// division and subtraction additionally wrap a child headed by the same
/// operator, since neither associates to the right.
fn needs_parens(operand: &Expr, parent: Op, side: Side) -> bool {
    let Expr::BinOp(child, _, _) = operand else {
        return false;
    };
    if child.precedence() < parent.precedence() {
        return true;
    }
    side == Side::Right && matches!(parent, Op::Sub | Op::Div) && *child == parent
}
