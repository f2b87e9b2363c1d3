//! Parser module - converts postfix (reverse-Polish) strings to AST

use crate::ast::{Expr, FuncKind, Op};
use crate::error::Error;

/// Parse a postfix string into an expression tree.
///
/// A single left-to-right pass over the input maintains a stack of owned
/// tree nodes: nullary symbols push leaves, operators pop their operands
/// and push the combined node. A well-formed input leaves exactly one node
/// on the stack, which becomes the root.
///
/// The accepted alphabet is wider than what the search generator emits:
/// `0` and the variable letters `y z a b c` parse fine, so hand-written
/// postfix works too. The sugar symbols desugar on the way in:
/// `\` -> `1 / v`, `H` -> `v / 2`, `<` -> `v - 1`, `>` -> `v + 1`,
/// `2` -> `v ^ 2`, `~` -> negation.
///
/// # Example
/// ```
/// use stochint::parse;
///
/// let tree = parse("xx*S").unwrap();
/// assert_eq!(tree.to_string(), "sin(x * x)");
/// ```
///
/// # Errors
/// Returns [`Error`] if the input is empty, contains a byte outside the
/// alphabet, pops an empty stack, or leaves more than one operand behind.
pub fn parse(src: &str) -> Result<Expr, Error> {
    let mut stack: Vec<Expr> = Vec::new();

    for (pos, &symbol) in src.as_bytes().iter().enumerate() {
        match symbol {
            b'0' => stack.push(Expr::Int(0)),
            b'1' => stack.push(Expr::Int(1)),
            b'x' | b'y' | b'z' | b'a' | b'b' | b'c' => stack.push(Expr::Var(symbol as char)),

            b'S' | b'C' | b'T' | b'R' | b'L' => {
                let kind = match symbol {
                    b'S' => FuncKind::Sin,
                    b'C' => FuncKind::Cos,
                    b'T' => FuncKind::Tan,
                    b'R' => FuncKind::Sqrt,
                    _ => FuncKind::Log,
                };
                let arg = pop(&mut stack, pos)?;
                stack.push(Expr::func(kind, arg));
            }

            b'+' | b'-' | b'*' | b'/' => {
                let op = match symbol {
                    b'+' => Op::Add,
                    b'-' => Op::Sub,
                    b'*' => Op::Mul,
                    _ => Op::Div,
                };
                let rhs = pop(&mut stack, pos)?;
                let lhs = pop(&mut stack, pos)?;
                stack.push(Expr::bin_op(op, lhs, rhs));
            }

            b'\\' => {
                let rhs = pop(&mut stack, pos)?;
                stack.push(Expr::bin_op(Op::Div, Expr::Int(1), rhs));
            }
            b'H' => {
                let lhs = pop(&mut stack, pos)?;
                stack.push(Expr::bin_op(Op::Div, lhs, Expr::Int(2)));
            }
            b'<' => {
                let lhs = pop(&mut stack, pos)?;
                stack.push(Expr::bin_op(Op::Sub, lhs, Expr::Int(1)));
            }
            b'>' => {
                let lhs = pop(&mut stack, pos)?;
                stack.push(Expr::bin_op(Op::Add, lhs, Expr::Int(1)));
            }
            b'2' => {
                let lhs = pop(&mut stack, pos)?;
                stack.push(Expr::bin_op(Op::Pow, lhs, Expr::Int(2)));
            }
            b'~' => {
                let rhs = pop(&mut stack, pos)?;
                stack.push(Expr::neg(rhs));
            }

            _ => return Err(Error::unknown_symbol(symbol, pos)),
        }
    }

    let root = stack.pop().ok_or(Error::EmptyExpression)?;
    if stack.is_empty() {
        Ok(root)
    } else {
        Err(Error::UnbalancedExpression {
            remaining: stack.len() + 1,
        })
    }
}

fn pop(stack: &mut Vec<Expr>, pos: usize) -> Result<Expr, Error> {
    stack.pop().ok_or(Error::StackUnderflow { pos })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_desugars_to_pow() {
        let tree = parse("x2").unwrap();
        assert_eq!(
            tree,
            Expr::bin_op(Op::Pow, Expr::Var('x'), Expr::Int(2))
        );
    }

    #[test]
    fn test_reciprocal_desugars_with_unit_numerator() {
        let tree = parse("x\\").unwrap();
        assert_eq!(
            tree,
            Expr::bin_op(Op::Div, Expr::Int(1), Expr::Var('x'))
        );
    }

    #[test]
    fn test_wider_variable_set() {
        let tree = parse("yz+").unwrap();
        assert_eq!(
            tree,
            Expr::bin_op(Op::Add, Expr::Var('y'), Expr::Var('z'))
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Err(Error::EmptyExpression));
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(
            parse("xq+"),
            Err(Error::UnknownSymbol {
                symbol: 'q',
                pos: 1
            })
        );
    }

    #[test]
    fn test_underflow() {
        assert_eq!(parse("x+"), Err(Error::StackUnderflow { pos: 1 }));
        assert_eq!(parse("S"), Err(Error::StackUnderflow { pos: 0 }));
    }

    #[test]
    fn test_unbalanced() {
        assert_eq!(
            parse("xx"),
            Err(Error::UnbalancedExpression { remaining: 2 })
        );
    }
}
