//! Multithreaded random-search coordinator

use std::num::NonZeroU32;
use std::sync::Mutex;
use std::thread;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::composer::Composer;
use super::verify::is_antiderivative;
use crate::{BATCH_SIZE, TENTATIVE_LEN, trace_enabled};

/// Shared result cell, the only cross-thread state of a search.
///
/// `answer` is write-once: the first worker to take the lock after
/// verifying a candidate wins; later winners only add their attempt
/// counts.
struct SearchState {
    answer: Option<String>,
    attempts: u64,
}

/// Builder for a random antiderivative search.
///
/// Workers loop generate / compile / verify in batches, re-checking the
/// shared cell between batches; the whole fleet drains within one batch
/// of the first success or of the budget running out.
///
/// # Example
/// ```no_run
/// use stochint::Search;
///
/// let samples = [(0.5, 1.0), (1.5, 3.0)]; // f(x) = 2x
/// let (answer, attempts) = Search::new()
///     .seed(4)
///     .workers(4)
///     .max_attempts(100_000_000)
///     .run(&samples);
/// ```
#[derive(Debug, Clone)]
pub struct Search {
    seed: u32,
    workers: usize,
    max_attempts: u64,
    tentative_len: u32,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    pub fn new() -> Self {
        Search {
            seed: 1,
            workers: 1,
            max_attempts: 0,
            tentative_len: TENTATIVE_LEN,
        }
    }

    /// Master seed; per-worker sub-seeds are derived from it.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Number of OS threads to search with (at least one).
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Total attempt budget across all workers; `0` means unbounded.
    pub fn max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Tentative length bound handed to the generator, clamped to
    /// `1..=EXPR_MAX_SIZE` so candidates fit the operand stack.
    pub fn tentative_len(mut self, tentative_len: u32) -> Self {
        self.tentative_len = tentative_len.clamp(1, crate::EXPR_MAX_SIZE as u32);
        self
    }

    /// Run the search and return the winning postfix string, if any,
    /// together with the total number of attempts.
    ///
    /// Multiple workers may verify a candidate in the same batch; the
    /// first to take the lock sets the answer and the others' attempts
    /// still count toward the total.
    pub fn run(&self, samples: &[(f64, f64)]) -> (Option<String>, u64) {
        let budget = if self.max_attempts == 0 {
            u64::MAX
        } else {
            self.max_attempts
        };
        let tentative_len = self.tentative_len;
        let state = Mutex::new(SearchState {
            answer: None,
            attempts: 0,
        });

        // Sub-seeds come from a separate seedable generator so that the
        // workers' xorshift streams are decorrelated. Zero would be a
        // degenerate xorshift state, hence the retry.
        let mut seeder = StdRng::seed_from_u64(u64::from(self.seed));
        let seeds: Vec<NonZeroU32> = (0..self.workers)
            .map(|_| loop {
                if let Some(seed) = NonZeroU32::new(seeder.next_u32()) {
                    break seed;
                }
            })
            .collect();

        thread::scope(|scope| {
            for seed in seeds {
                let state = &state;
                scope.spawn(move || worker(seed, samples, state, budget, tentative_len));
            }
        });

        let state = state.into_inner().expect("a search worker panicked");
        (state.answer, state.attempts)
    }
}

fn worker(
    seed: NonZeroU32,
    samples: &[(f64, f64)],
    state: &Mutex<SearchState>,
    budget: u64,
    tentative_len: u32,
) {
    let mut composer = Composer::new(seed);

    loop {
        for attempt in 1..BATCH_SIZE {
            composer.compose(tentative_len);
            if is_antiderivative(&mut composer, samples) {
                let mut state = state.lock().expect("a search worker panicked");
                state.attempts += attempt;
                if state.answer.is_none() {
                    state.answer = Some(composer.expr().to_owned());
                }
                if trace_enabled() {
                    eprintln!(
                        "[stochint] worker accepted {:?} after {} attempts",
                        composer.expr(),
                        attempt
                    );
                }
                return;
            }
        }

        let mut state = state.lock().expect("a search worker panicked");
        state.attempts += BATCH_SIZE;
        if state.answer.is_some() || state.attempts > budget {
            if trace_enabled() {
                eprintln!(
                    "[stochint] worker exiting after {} total attempts",
                    state.attempts
                );
            }
            return;
        }
    }
}
