//! Random expression search engine.
//!
//! This module owns the hot path of the crate: generating grammatically
//! valid postfix candidates, compiling them to flat instruction tapes, and
//! evaluating those tapes against sample points via a finite-difference
//! derivative.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌───────────┐    ┌──────────┐
//! │ Xorshift │ -> │ Composer │ -> │ Evaluator │ <- │ Verifier │
//! │  (PRNG)  │    │ (postfix)│    │  (stack)  │    │  (loss)  │
//! └──────────┘    └──────────┘    └───────────┘    └──────────┘
//!                                                        │
//!                                                  ┌───────────┐
//!                                                  │  Search   │
//!                                                  │ (threads) │
//!                                                  └───────────┘
//! ```
//!
//! Each worker thread owns one [`Composer`] (PRNG + operand stack +
//! reusable buffers); the only cross-thread state is the result cell
//! inside [`Search`].

mod composer;
mod grammar;
mod instruction;
mod rng;
mod search;
mod verify;

pub use composer::Composer;
pub use instruction::Instruction;
pub use rng::Xorshift32;
pub use search::Search;
pub use verify::{derivative, is_antiderivative, loss};
