//! # Wordle Solver
//!
//! A multithreaded Wordle solver that picks each guess by minimising the
//! expected number of words still possible afterwards.
//!
//! Near the end of a game the best information-gathering word is often not a
//! word that could be the answer. The solver then looks one round ahead and
//! compares the expected number of guesses under both choices.

pub mod dictionary;
pub mod evaluator;
pub mod feedback;
pub mod filter;
pub mod solver;
pub mod stats;
pub mod strategy;
pub mod word;

pub use dictionary::{load_dictionary, parse_dictionary, DictionaryError};
pub use evaluator::expected_possibility_count;
pub use feedback::{Feedback, FeedbackPattern, PatternError};
pub use filter::{reduce_possibilities, Constraints};
pub use solver::{SolveReport, WordleSolver};
pub use stats::{RunStats, StatsError};
pub use strategy::{
    compute_guess, Anomaly, Decision, GuessExpectationTable, Policy, Selection,
    Strategy,
};
pub use word::{Word, WordError};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game.
pub const MAX_ROUNDS: usize = 6;

/// Feedback for `guess` against `target`. Same as [`FeedbackPattern::compute`].
pub fn compute_result(guess: &Word, target: &Word) -> FeedbackPattern {
    FeedbackPattern::compute(guess, target)
}
