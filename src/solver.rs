//! The solve loop.
//!
//! [`WordleSolver`] owns the round-scoped possibility set and drives the
//! strategy for up to `max_rounds` rounds. Feedback comes from a caller
//! supplied closure, so the same loop serves a known target, a benchmark,
//! or a human reading colours off a real game.

use crate::feedback::FeedbackPattern;
use crate::filter::reduce_possibilities;
use crate::stats::RunStats;
use crate::strategy::{compute_guess, Anomaly, Policy, Selection};
use crate::word::Word;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Everything a reporting collaborator needs about one solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    /// Set when the solve ran against a known target.
    pub target: Option<Word>,
    pub guesses: Vec<(Word, FeedbackPattern)>,
    /// The last feedback was all green within the round budget.
    pub success: bool,
    /// Possibility set after the final round.
    pub remaining: Vec<Word>,
    pub anomalies: Vec<Anomaly>,
}

impl SolveReport {
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    pub fn words(&self) -> Vec<Word> {
        self.guesses.iter().map(|(w, _)| *w).collect()
    }
}

#[derive(Debug, Clone)]
pub struct WordleSolver {
    dictionary: Vec<Word>,
    initial_possibilities: Vec<Word>,
    possibilities: Vec<Word>,
    policy: Policy,
    rng: StdRng,
    seed: Option<u64>,
    round: usize,
    anomalies: Vec<Anomaly>,
}

impl WordleSolver {
    /// Solver whose possible answers are the whole dictionary.
    pub fn new(dictionary: Vec<Word>) -> Self {
        let possibilities = dictionary.clone();
        Self::with_possibilities(dictionary, possibilities)
    }

    /// Solver guessing from `dictionary` while the answer is known to be in
    /// `possibilities`.
    pub fn with_possibilities(dictionary: Vec<Word>, possibilities: Vec<Word>) -> Self {
        Self {
            dictionary,
            initial_possibilities: possibilities.clone(),
            possibilities,
            policy: Policy::default(),
            rng: StdRng::from_entropy(),
            seed: None,
            round: 0,
            anomalies: Vec::new(),
        }
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Fix the random choice made when two or fewer possibilities remain.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = Some(seed);
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn remaining_count(&self) -> usize {
        self.possibilities.len()
    }

    pub fn possible_answers(&self) -> &[Word] {
        &self.possibilities
    }

    /// Anomalies met since the last reset.
    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    /// True once every round has been played.
    pub fn is_exhausted(&self) -> bool {
        self.round >= self.policy.max_rounds
    }

    pub fn reset(&mut self) {
        self.possibilities = self.initial_possibilities.clone();
        self.round = 0;
        self.anomalies.clear();
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    /// Choose the guess for the current round without consuming it.
    pub fn next_guess(&mut self) -> Selection {
        let selection = compute_guess(
            &self.dictionary,
            &self.possibilities,
            self.round,
            &self.policy,
            &mut self.rng,
        );
        self.anomalies.extend(selection.anomalies.iter().cloned());
        selection
    }

    /// Narrow the possibilities with the feedback for `guess` and move to the
    /// next round.
    pub fn apply_feedback(&mut self, guess: &Word, pattern: FeedbackPattern) {
        let before = self.possibilities.len();
        self.possibilities = reduce_possibilities(guess, pattern, &self.possibilities);
        log::debug!(
            "round {}: {} -> {} ({} -> {} possibilities)",
            self.round,
            guess,
            pattern,
            before,
            self.possibilities.len()
        );
        self.round += 1;
    }

    /// Play from the current round until solved or out of rounds.
    pub fn solve_with_feedback<F>(&mut self, mut get_feedback: F) -> SolveReport
    where
        F: FnMut(&Word) -> FeedbackPattern,
    {
        let mut guesses = Vec::new();
        let mut success = false;

        while !self.is_exhausted() {
            let guess = self.next_guess().word;
            let pattern = get_feedback(&guess);
            guesses.push((guess, pattern));
            self.apply_feedback(&guess, pattern);

            if pattern.is_win() {
                success = true;
                break;
            }
        }

        SolveReport {
            target: None,
            guesses,
            success,
            remaining: self.possibilities.clone(),
            anomalies: self.anomalies.clone(),
        }
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking)
    pub fn solve_for_target(&mut self, target: &Word) -> SolveReport {
        let mut report = self.solve_with_feedback(|guess| FeedbackPattern::compute(guess, target));
        report.target = Some(*target);
        report
    }

    /// Solve every target from a fresh copy of this solver, in parallel.
    pub fn solve_all(&self, targets: &[Word]) -> Vec<SolveReport> {
        targets
            .par_iter()
            .map(|target| {
                let mut solver = self.clone();
                solver.reset();
                solver.solve_for_target(target)
            })
            .collect()
    }

    /// Win and guess-count statistics over `targets`.
    pub fn benchmark_guess_distribution(&self, targets: &[Word]) -> RunStats {
        let mut stats = RunStats::default();
        for report in self.solve_all(targets) {
            stats.record(&report);
        }
        stats
    }
}
