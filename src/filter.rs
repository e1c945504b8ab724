//! Narrowing the possibility set from one round of feedback.
//!
//! A `(guess, pattern)` pair is compiled into [`Constraints`] once and then
//! checked against every candidate. The constraints only look at the guess
//! and the pattern, never at a target, so they work just as well for
//! feedback typed in by a human.

use crate::feedback::{Feedback, FeedbackPattern};
use crate::word::Word;
use crate::WORD_LENGTH;

/// How many copies of a guessed letter the target must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountRule {
    /// At least one copy came back grey, so the lit copies are all there are.
    Exactly(usize),
    /// Every copy lit up; the target may hold more.
    AtLeast(usize),
}

impl CountRule {
    fn allows(self, count: usize) -> bool {
        match self {
            CountRule::Exactly(n) => count == n,
            CountRule::AtLeast(n) => count >= n,
        }
    }
}

/// What a single position says about the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionRule {
    Is(u8),
    IsNot(u8),
}

impl PositionRule {
    fn allows(self, letter: u8) -> bool {
        match self {
            PositionRule::Is(l) => letter == l,
            PositionRule::IsNot(l) => letter != l,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    /// One entry per distinct letter of the guess, in first-seen order.
    counts: Vec<(u8, CountRule)>,
    positions: [PositionRule; WORD_LENGTH],
}

impl Constraints {
    pub fn new(guess: &Word, pattern: FeedbackPattern) -> Self {
        let feedbacks = pattern.to_feedbacks();

        let mut counts: Vec<(u8, CountRule)> = Vec::with_capacity(WORD_LENGTH);
        for &letter in guess.bytes() {
            if counts.iter().any(|&(l, _)| l == letter) {
                continue;
            }
            let mut letter_cnt = 0;
            let mut grey_cnt = 0;
            for (i, &fb) in feedbacks.iter().enumerate() {
                if guess.at(i) == letter {
                    letter_cnt += 1;
                    if fb == Feedback::Absent {
                        grey_cnt += 1;
                    }
                }
            }
            let rule = if grey_cnt > 0 {
                CountRule::Exactly(letter_cnt - grey_cnt)
            } else {
                CountRule::AtLeast(letter_cnt)
            };
            counts.push((letter, rule));
        }

        let mut positions = [PositionRule::IsNot(0); WORD_LENGTH];
        for (i, (rule, fb)) in positions.iter_mut().zip(feedbacks).enumerate() {
            *rule = match fb {
                Feedback::Exact => PositionRule::Is(guess.at(i)),
                Feedback::Absent | Feedback::Misplaced => PositionRule::IsNot(guess.at(i)),
            };
        }

        Self { counts, positions }
    }

    pub fn count_rules(&self) -> &[(u8, CountRule)] {
        &self.counts
    }

    pub fn position_rules(&self) -> &[PositionRule; WORD_LENGTH] {
        &self.positions
    }

    /// Whether `candidate` is consistent with the feedback.
    pub fn matches(&self, candidate: &Word) -> bool {
        self.counts
            .iter()
            .all(|&(letter, rule)| rule.allows(candidate.letter_count(letter)))
            && self
                .positions
                .iter()
                .enumerate()
                .all(|(i, rule)| rule.allows(candidate.at(i)))
    }

    /// Number of `possibilities` that survive, without building the subset.
    pub fn count_matching(&self, possibilities: &[Word]) -> usize {
        possibilities.iter().filter(|w| self.matches(w)).count()
    }
}

/// Keep the possibilities consistent with `pattern` for `guess`, in order.
pub fn reduce_possibilities(
    guess: &Word,
    pattern: FeedbackPattern,
    possibilities: &[Word],
) -> Vec<Word> {
    let constraints = Constraints::new(guess, pattern);
    possibilities
        .iter()
        .filter(|w| constraints.matches(w))
        .copied()
        .collect()
}
