//! Scoring a single guess against the current possibility set.
//!
//! Every possibility is treated in turn as the hidden target. The guess is
//! scored against it, the resulting feedback is run through the filter over
//! the same possibilities, and the surviving subset sizes are summed.
//!
//! The filter only depends on `(guess, pattern)`, so the subset size for a
//! pattern is computed once and reused for every target that produces it.
//! This turns the quadratic scan into one filter pass per distinct pattern
//! without changing the result.

use crate::feedback::FeedbackPattern;
use crate::filter::Constraints;
use crate::word::Word;

const UNSEEN: usize = usize::MAX;

/// Sum over every possible target of the possibility count left after
/// guessing `word`.
///
/// Kept as an integer so that two guesses can be compared exactly; every
/// candidate in a round is divided by the same `possibilities.len()`.
pub fn total_possibility_count(word: &Word, possibilities: &[Word]) -> usize {
    let mut sizes = [UNSEEN; FeedbackPattern::NUM_PATTERNS];
    let mut total = 0;
    for target in possibilities {
        let pattern = FeedbackPattern::compute(word, target);
        let slot = &mut sizes[pattern.0 as usize];
        if *slot == UNSEEN {
            *slot = Constraints::new(word, pattern).count_matching(possibilities);
        }
        total += *slot;
    }
    total
}

/// Expected size of the possibility set after guessing `word`, averaged over
/// every possibility as a hypothetical target. Zero for an empty set.
pub fn expected_possibility_count(word: &Word, possibilities: &[Word]) -> f64 {
    if possibilities.is_empty() {
        return 0.0;
    }
    total_possibility_count(word, possibilities) as f64 / possibilities.len() as f64
}

/// Size of the possibility set left after guessing `word` when `target` is
/// the answer.
pub fn remaining_after(word: &Word, target: &Word, possibilities: &[Word]) -> usize {
    let pattern = FeedbackPattern::compute(word, target);
    Constraints::new(word, pattern).count_matching(possibilities)
}
