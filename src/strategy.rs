//! Greedy guess selection with an endgame lookahead.
//!
//! Each round the whole dictionary is scored by expected remaining
//! possibilities. The overall winner is the "information word"; the winner
//! among words that could still be the answer is the "possible word". When
//! they differ, [`decide`] settles the dilemma with a one-round lookahead
//! priced by a [`GuessExpectationTable`].

use crate::evaluator::{remaining_after, total_possibility_count};
use crate::word::Word;
use crate::MAX_ROUNDS;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::collections::HashSet;
use thiserror::Error;

/// Largest possibility count the expectation table covers.
pub const TABLE_SIZE: usize = 10;

/// Expected number of further guesses needed once `n` possibilities remain,
/// for `n` in `1..=TABLE_SIZE`. Precomputed offline.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessExpectationTable([f64; TABLE_SIZE]);

impl GuessExpectationTable {
    pub const CANONICAL: Self = Self([1.0, 1.5, 1.75, 1.9375, 2.025, 2.25, 2.5, 2.5, 2.5, 2.5]);

    pub const fn new(values: [f64; TABLE_SIZE]) -> Self {
        Self(values)
    }

    /// Look up `remaining`. Counts outside the table clamp to the nearest
    /// entry and are recorded in `anomalies`.
    pub fn lookup(&self, remaining: usize, anomalies: &mut Vec<Anomaly>) -> f64 {
        let clamped = remaining.clamp(1, TABLE_SIZE);
        if clamped != remaining {
            log::warn!(
                "no expected-guess entry for {} possibilities, using the entry for {}",
                remaining,
                clamped
            );
            anomalies.push(Anomaly::TableOutOfRange {
                remaining,
                clamped_to: clamped,
            });
        }
        self.0[clamped - 1]
    }
}

impl Default for GuessExpectationTable {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// How guesses are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Expected-count scan with the endgame lookahead.
    #[default]
    Greedy,
    /// Uniform pick from the current possibilities. A baseline to compare
    /// the greedy policy against.
    Random,
}

/// Tunable constants of the selection policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    pub strategy: Strategy,
    /// Played in round 0 without scanning.
    pub opening: Word,
    /// Played when no possibility is left.
    pub fallback: Word,
    /// A possible word expected to leave more than this many possibilities
    /// loses the dilemma outright.
    pub dilemma_threshold: f64,
    pub max_rounds: usize,
    pub expectations: GuessExpectationTable,
}

impl Policy {
    pub const CANONICAL: Self = Self {
        strategy: Strategy::Greedy,
        opening: Word::from_bytes(*b"roate"),
        fallback: Word::from_bytes(*b"abode"),
        dilemma_threshold: 3.5,
        max_rounds: MAX_ROUNDS,
        expectations: GuessExpectationTable::CANONICAL,
    };

    fn is_last_round(&self, round: usize) -> bool {
        round + 1 >= self.max_rounds
    }

    fn is_second_to_last_round(&self, round: usize) -> bool {
        round + 2 == self.max_rounds
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Recoverable oddities met while choosing a guess.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    #[error("no possibilities left in round {round}; feedback contradicts earlier rounds")]
    EmptyPossibilities { round: usize },
    #[error("expected-guess table has no entry for {remaining}, clamped to {clamped_to}")]
    TableOutOfRange { remaining: usize, clamped_to: usize },
}

/// A dictionary word with its summed post-guess possibility count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub word: Word,
    /// Position in the dictionary, used to break ties.
    pub index: usize,
    pub total: usize,
}

impl Scored {
    pub fn expected(&self, possibilities: usize) -> f64 {
        self.total as f64 / possibilities as f64
    }

    fn key(&self) -> (usize, usize) {
        (self.total, self.index)
    }
}

/// Outcome of one full dictionary scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scan {
    pub best: Option<Scored>,
    pub best_possible: Option<Scored>,
}

fn lower(a: Option<Scored>, b: Option<Scored>) -> Option<Scored> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if b.key() < a.key() { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}

impl Scan {
    fn merge(self, other: Self) -> Self {
        Self {
            best: lower(self.best, other.best),
            best_possible: lower(self.best_possible, other.best_possible),
        }
    }
}

/// Score every dictionary word in parallel.
///
/// Ties resolve to the word appearing first in the dictionary no matter how
/// the work is split, since the reduction orders by `(total, index)`.
pub fn scan(dictionary: &[Word], possibilities: &[Word]) -> Scan {
    let possible: HashSet<Word> = possibilities.iter().copied().collect();
    dictionary
        .par_iter()
        .enumerate()
        .map(|(index, word)| {
            let scored = Scored {
                word: *word,
                index,
                total: total_possibility_count(word, possibilities),
            };
            Scan {
                best: Some(scored),
                best_possible: possible.contains(word).then_some(scored),
            }
        })
        .reduce(Scan::default, Scan::merge)
}

/// Sequential version of [`scan`]; first strictly smaller total wins.
pub fn scan_sequential(dictionary: &[Word], possibilities: &[Word]) -> Scan {
    let possible: HashSet<Word> = possibilities.iter().copied().collect();
    let mut out = Scan::default();
    for (index, word) in dictionary.iter().enumerate() {
        let scored = Scored {
            word: *word,
            index,
            total: total_possibility_count(word, possibilities),
        };
        if out.best.map_or(true, |b| scored.total < b.total) {
            out.best = Some(scored);
        }
        if possible.contains(word) && out.best_possible.map_or(true, |b| scored.total < b.total) {
            out.best_possible = Some(scored);
        }
    }
    out
}

/// Average number of guesses still needed under each choice, over every
/// possibility as the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lookahead {
    pub possible_word: f64,
    pub information_word: f64,
}

pub fn lookahead(
    information_word: &Word,
    possible_word: &Word,
    possibilities: &[Word],
    table: &GuessExpectationTable,
    anomalies: &mut Vec<Anomaly>,
) -> Lookahead {
    let mut from_possible = 0.0;
    let mut from_information = 0.0;
    for target in possibilities {
        if target == possible_word {
            from_possible += 1.0;
        } else {
            let left = remaining_after(possible_word, target, possibilities);
            from_possible += 1.0 + table.lookup(left, anomalies);
        }
        let left = remaining_after(information_word, target, possibilities);
        from_information += 1.0 + table.lookup(left, anomalies);
    }
    let n = possibilities.len() as f64;
    Lookahead {
        possible_word: from_possible / n,
        information_word: from_information / n,
    }
}

/// Which side of a dilemma to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    InformationWord,
    PossibleWord,
    /// Both choices cost the same; played as the possible word.
    Tie,
}

/// Settle a dilemma between the information word and the possible word.
///
/// `possible_expected` is the possible word's own expected remaining count.
/// The lookahead only runs once the cheap checks are exhausted.
pub fn decide(
    policy: &Policy,
    round: usize,
    possible_expected: f64,
    lookahead: impl FnOnce() -> Lookahead,
) -> Decision {
    if possible_expected > policy.dilemma_threshold {
        return Decision::InformationWord;
    }
    if policy.is_last_round(round) {
        return Decision::PossibleWord;
    }
    let cost = lookahead();
    if policy.is_second_to_last_round(round)
        && cost.possible_word == cost.information_word
        && cost.possible_word == 2.0
    {
        return Decision::InformationWord;
    }
    if cost.possible_word < cost.information_word {
        Decision::PossibleWord
    } else if cost.possible_word == cost.information_word {
        Decision::Tie
    } else {
        Decision::InformationWord
    }
}

/// Why a guess was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Opening,
    /// Nothing was possible any more.
    Fallback,
    /// One or two possibilities left, picked at random.
    Endgame,
    /// Picked at random under [`Strategy::Random`].
    Random,
    /// The information word could also be the answer, or no possible word
    /// was in the dictionary.
    Greedy,
    Dilemma(Decision),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub word: Word,
    pub reason: Reason,
    /// Expected possibilities left after this guess, when a scan ran.
    pub expected_remaining: Option<f64>,
    pub anomalies: Vec<Anomaly>,
}

impl Selection {
    fn simple(word: Word, reason: Reason) -> Self {
        Self {
            word,
            reason,
            expected_remaining: None,
            anomalies: Vec::new(),
        }
    }
}

/// Pick the guess for `round` (0-based).
pub fn compute_guess<R: Rng + ?Sized>(
    dictionary: &[Word],
    possibilities: &[Word],
    round: usize,
    policy: &Policy,
    rng: &mut R,
) -> Selection {
    if possibilities.is_empty() {
        let anomaly = Anomaly::EmptyPossibilities { round };
        log::warn!("{}; guessing {}", anomaly, policy.fallback);
        let mut selection = Selection::simple(policy.fallback, Reason::Fallback);
        selection.anomalies.push(anomaly);
        return selection;
    }
    if policy.strategy == Strategy::Random {
        if let Some(word) = possibilities.choose(rng) {
            return Selection::simple(*word, Reason::Random);
        }
    }
    if round == 0 {
        return Selection::simple(policy.opening, Reason::Opening);
    }
    if possibilities.len() <= 2 {
        if let Some(word) = possibilities.choose(rng) {
            return Selection::simple(*word, Reason::Endgame);
        }
    }

    let n = possibilities.len();
    let Scan {
        best,
        best_possible,
    } = scan(dictionary, possibilities);
    log::debug!(
        "round {}: best {:?}, best possible {:?} over {} possibilities",
        round,
        best.map(|s| (s.word, s.expected(n))),
        best_possible.map(|s| (s.word, s.expected(n))),
        n
    );

    let (best, possible) = match (best, best_possible) {
        (Some(best), Some(possible)) => (best, possible),
        (Some(best), None) => {
            return Selection {
                word: best.word,
                reason: Reason::Greedy,
                expected_remaining: Some(best.expected(n)),
                anomalies: Vec::new(),
            }
        }
        // empty dictionary: nothing to scan, guess a possibility
        (None, _) => return Selection::simple(possibilities[0], Reason::Greedy),
    };

    if best.word == possible.word {
        return Selection {
            word: best.word,
            reason: Reason::Greedy,
            expected_remaining: Some(best.expected(n)),
            anomalies: Vec::new(),
        };
    }

    let mut anomalies = Vec::new();
    let decision = decide(policy, round, possible.expected(n), || {
        lookahead(
            &best.word,
            &possible.word,
            possibilities,
            &policy.expectations,
            &mut anomalies,
        )
    });
    log::debug!(
        "dilemma between {} and {} in round {}: {:?}",
        best.word,
        possible.word,
        round,
        decision
    );
    let chosen = match decision {
        Decision::InformationWord => best,
        Decision::PossibleWord | Decision::Tie => possible,
    };
    Selection {
        word: chosen.word,
        reason: Reason::Dilemma(decision),
        expected_remaining: Some(chosen.expected(n)),
        anomalies,
    }
}
