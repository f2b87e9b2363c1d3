//! Random-Search Symbolic Antidifferentiation
//!
//! A small, fast library that hunts for a symbolic antiderivative of a
//! real-valued function of one variable. Instead of symbolic integration
//! rules it plays a numbers game: generate random expressions in a compact
//! postfix encoding, differentiate each one numerically at a handful of
//! sample points, and keep the first candidate whose derivative matches the
//! target values.
//!
//! # Features
//! - Grammatically valid postfix generation over a fixed alphabet
//! - Allocation-free hot loop: compiled instruction tape + fixed operand stack
//! - Multithreaded search with first-success termination
//! - Postfix -> simplified infix rendering for human-readable results
//!
//! # Usage Examples
//!
//! ## One-shot search
//! ```no_run
//! let f = |x: f64| x / x.tan();
//! let samples: Vec<(f64, f64)> = [0.2, 0.5, 0.9, 1.5, 2.0]
//!     .iter()
//!     .map(|&x| (x, f(x)))
//!     .collect();
//!
//! let (answer, attempts) = stochint::search(&samples, 4, 4, 100_000_000);
//! println!("tried {attempts} candidates");
//! if let Some(postfix) = answer {
//!     println!("{}", stochint::infix_from_postfix(&postfix).unwrap());
//! }
//! ```
//!
//! ## Builder API
//! ```no_run
//! use stochint::Search;
//!
//! let samples = [(0.5, 1.0), (1.5, 3.0)]; // f(x) = 2x
//! let (answer, _) = Search::new()
//!     .seed(7)
//!     .workers(2)
//!     .max_attempts(10_000_000)
//!     .run(&samples);
//! assert!(answer.is_some());
//! ```

mod ast;
mod display;
mod engine;
mod error;
mod parser;
mod simplification;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use ast::{Expr, FuncKind, Op};
pub use engine::{Composer, Instruction, Search, Xorshift32, derivative, is_antiderivative, loss};
pub use error::Error;
pub use parser::parse;
pub use simplification::simplify;

/// Operand stack capacity, and the practical ceiling on postfix length.
pub const EXPR_MAX_SIZE: usize = 64;
/// Squared-error loss below which a candidate is accepted as an integral.
pub const TOLERANCE: f64 = 1e-10;
/// Attempts between shared-state checks in each search worker.
pub const BATCH_SIZE: u64 = 10_000;
/// Default tentative length bound for generated candidates.
pub const TENTATIVE_LEN: u32 = 20;

/// Check if tracing is enabled via environment variable (cached)
pub(crate) fn trace_enabled() -> bool {
    use std::sync::OnceLock;
    static TRACE: OnceLock<bool> = OnceLock::new();
    *TRACE.get_or_init(|| {
        std::env::var("STOCHINT_TRACE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    })
}

/// Main API function for the antiderivative search.
///
/// # Arguments
/// * `samples` - Pairs `(x, f(x))` of the target function; a candidate is
///   accepted when its numerical derivative reproduces the `f(x)` values
/// * `seed` - Master seed from which per-worker sub-seeds are derived
/// * `workers` - Number of OS threads to search with
/// * `max_attempts` - Search budget; `0` means unbounded
///
/// # Returns
/// The winning postfix string (or `None` if the budget ran out) and the
/// total number of candidates tried across all workers.
///
/// # Note
/// For more control (tentative length, etc.), use the [`Search`] builder.
pub fn search(
    samples: &[(f64, f64)],
    seed: u32,
    workers: usize,
    max_attempts: u64,
) -> (Option<String>, u64) {
    Search::new()
        .seed(seed)
        .workers(workers)
        .max_attempts(max_attempts)
        .run(samples)
}

/// Convert a postfix expression to simplified infix notation.
///
/// Parses the postfix string into an expression tree, rewrites it to a
/// fixed point, and renders the result with minimal parentheses.
///
/// # Example
/// ```
/// assert_eq!(stochint::infix_from_postfix("xx*S").unwrap(), "sin(x * x)");
/// assert_eq!(stochint::infix_from_postfix("11+").unwrap(), "2");
/// ```
///
/// # Errors
/// Returns [`Error`] if the input contains a byte outside the postfix
/// alphabet or does not reduce to exactly one operand.
pub fn infix_from_postfix(postfix: &str) -> Result<String, Error> {
    let tree = parser::parse(postfix)?;
    Ok(simplification::simplify(tree).to_string())
}
