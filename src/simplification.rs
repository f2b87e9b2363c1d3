//! Fixed-point tree rewriting
//!
//! A small rule set folds constants and strips trivial structure from a
//! freshly parsed tree before printing. Passes repeat until one completes
//! without modifying the tree; every individual rewrite strictly reduces
//! the node count, which bounds the loop.

use crate::ast::{Expr, Op};
use crate::trace_enabled;

/// Simplify an expression tree to a fixed point.
///
/// Each pass is a post-order traversal: children are rewritten before
/// their parent, so constant folds propagate upward within a single pass
/// where possible.
///
/// # Example
/// ```
/// use stochint::{parse, simplify};
///
/// let tree = simplify(parse("11+").unwrap());
/// assert_eq!(tree.to_string(), "2");
/// ```
pub fn simplify(expr: Expr) -> Expr {
    let mut root = expr;
    let mut pass = 0usize;
    while simplify_pass(&mut root) {
        pass += 1;
        if trace_enabled() {
            eprintln!("[stochint] simplify pass {pass}: {root}");
        }
    }
    root
}

/// One full post-order pass. Returns whether anything changed.
fn simplify_pass(node: &mut Expr) -> bool {
    let mut modified = false;
    match node {
        Expr::Neg(inner) => modified |= simplify_pass(inner),
        Expr::Func(_, arg) => modified |= simplify_pass(arg),
        Expr::BinOp(_, lhs, rhs) => {
            modified |= simplify_pass(lhs);
            modified |= simplify_pass(rhs);
        }
        Expr::Int(_) | Expr::Var(_) => {}
    }
    rewrite(node) || modified
}

/// Apply the first matching rewrite rule to a single node.
fn rewrite(node: &mut Expr) -> bool {
    let current = std::mem::replace(node, Expr::Int(0));
    match try_rewrite(current) {
        Ok(rewritten) => {
            *node = rewritten;
            true
        }
        Err(unchanged) => {
            *node = unchanged;
            false
        }
    }
}

/// `Ok` carries a rewritten node, `Err` hands the input back untouched.
fn try_rewrite(node: Expr) -> Result<Expr, Expr> {
    match node {
        // Negated literal, and double negation.
        Expr::Neg(inner) => match *inner {
            Expr::Int(v) => Ok(Expr::Int(-v)),
            Expr::Neg(grandchild) => Ok(*grandchild),
            other => Err(Expr::neg(other)),
        },

        Expr::BinOp(op, lhs, rhs) => {
            // Operators acting on two integers fold when the result is an
            // integer.
            if let (Some(a), Some(b)) = (lhs.as_int(), rhs.as_int())
                && let Some(v) = fold_int(op, a, b)
            {
                return Ok(Expr::Int(v));
            }

            // The integer 1 is the multiplication identity.
            if op == Op::Mul {
                if lhs.as_int() == Some(1) {
                    return Ok(*rhs);
                }
                if rhs.as_int() == Some(1) {
                    return Ok(*lhs);
                }
            }

            Err(Expr::BinOp(op, lhs, rhs))
        }

        other => Err(other),
    }
}

/// Fold a binary operator over two integer literals.
///
/// Division folds only when exact; exponentiation goes through floating
/// point and truncates on the way back. Sums and products wrap on
/// overflow rather than aborting.
fn fold_int(op: Op, a: i64, b: i64) -> Option<i64> {
    match op {
        Op::Add => Some(a.wrapping_add(b)),
        Op::Sub => Some(a.wrapping_sub(b)),
        Op::Mul => Some(a.wrapping_mul(b)),
        Op::Div => {
            if b != 0 && a % b == 0 {
                Some(a / b)
            } else {
                None
            }
        }
        Op::Pow => Some((a as f64).powf(b as f64) as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn simplified(postfix: &str) -> Expr {
        simplify(parse(postfix).unwrap())
    }

    #[test]
    fn test_negated_literal_folds() {
        assert_eq!(simplified("1~"), Expr::Int(-1));
    }

    #[test]
    fn test_double_negation_cancels() {
        assert_eq!(simplified("x~~"), Expr::Var('x'));
    }

    #[test]
    fn test_integer_folding() {
        assert_eq!(simplified("11+"), Expr::Int(2));
        assert_eq!(simplified("11+2"), Expr::Int(4));
        assert_eq!(simplified("11+~"), Expr::Int(-2));
    }

    #[test]
    fn test_inexact_division_stays() {
        // 1/2 has no integer value; the quotient node survives.
        let tree = simplified("111+/");
        assert_eq!(tree, Expr::bin_op(Op::Div, Expr::Int(1), Expr::Int(2)));
    }

    #[test]
    fn test_division_by_zero_literal_stays() {
        let tree = simplified("10/");
        assert_eq!(tree, Expr::bin_op(Op::Div, Expr::Int(1), Expr::Int(0)));
    }

    #[test]
    fn test_unit_factor_collapses() {
        assert_eq!(simplified("1x*"), Expr::Var('x'));
        assert_eq!(simplified("x1*"), Expr::Var('x'));
    }

    #[test]
    fn test_unit_operand_of_other_operators_survives() {
        // The identity rule is multiplication-only: 1 - x, x - 1, 1 / x
        // and x ^ 2's sibling x ^ 1-style shapes keep their structure.
        assert_eq!(simplified("1x-").to_string(), "1 - x");
        assert_eq!(simplified("x1-").to_string(), "x - 1");
        assert_eq!(simplified("x\\").to_string(), "1 / x");
    }

    #[test]
    fn test_nested_folding_reaches_fixed_point() {
        // ((1 + 1) * x) * (2 - 1)  ->  2 * x
        let tree = simplified("11+x*11+1-*");
        assert_eq!(
            tree,
            Expr::bin_op(Op::Mul, Expr::Int(2), Expr::Var('x'))
        );
    }

    #[test]
    fn test_idempotent_on_scenarios() {
        for postfix in ["x2", "1~", "11+", "x\\", "xH", "xx*S", "xx+x*"] {
            let once = simplified(postfix);
            let twice = simplify(once.clone());
            assert_eq!(once, twice, "simplify not idempotent on {postfix:?}");
        }
    }
}
