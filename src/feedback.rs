//! Feedback calculation for Wordle guesses.
//!
//! This module handles computing the feedback pattern (green/yellow/grey)
//! for a guess against a target word, and parsing patterns typed in by a
//! human playing a real game.

use crate::word::Word;
use crate::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter is not in the target, or the guess holds more copies of it
    /// than the target does (grey)
    Absent,
    /// Letter is in the target at another position (yellow)
    Misplaced,
    /// Correct letter in the correct position (green)
    Exact,
}

impl Feedback {
    pub fn to_char(self) -> char {
        match self {
            Feedback::Exact => '🟩',
            Feedback::Misplaced => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/grey)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Exact),
            'y' | '1' => Some(Feedback::Misplaced),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }

    fn digit(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Misplaced => 1,
            Feedback::Exact => 2,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
/// Encoded as a single u8 value (0-242).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(pub u8);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern '{0}' must have exactly 5 symbols")]
    BadLength(String),
    #[error("pattern '{0}' contains '{1}'; use g/y/b or 2/1/0")]
    BadSymbol(String, char),
}

impl FeedbackPattern {
    /// The all-green pattern.
    pub const ALL_EXACT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            pattern += fb.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Compare `guess` against `target`.
    ///
    /// Exact matches are marked first and consume their target position. Each
    /// remaining guess letter, left to right, then consumes the first
    /// unconsumed occurrence of that letter in the target and becomes
    /// misplaced, or is absent if none is left. A repeated letter therefore
    /// never lights up more often than it occurs in the target.
    pub fn compute(guess: &Word, target: &Word) -> Self {
        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess.at(i) == target.at(i) {
                feedback[i] = Feedback::Exact;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] == Feedback::Exact {
                continue;
            }
            let letter = guess.at(i);
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && target.at(j) == letter) {
                consumed[j] = true;
                feedback[i] = Feedback::Misplaced;
            }
        }

        Self::new(feedback)
    }

    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Misplaced,
                _ => Feedback::Exact,
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// Feedback at position `i`.
    pub fn at(self, i: usize) -> Feedback {
        self.to_feedbacks()[i]
    }

    pub fn is_win(self) -> bool {
        self == Self::ALL_EXACT
    }

    /// Parse a pattern from a string like "gybbb" or "21000"
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(PatternError::BadLength(s.to_string()));
        }
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for (slot, &c) in feedbacks.iter_mut().zip(&symbols) {
            *slot = Feedback::from_char(c).ok_or_else(|| PatternError::BadSymbol(s.to_string(), c))?;
        }
        Ok(Self::new(feedbacks))
    }

    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl FromStr for FeedbackPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
