//! The fixed-length word value type.
//!
//! Words are stored as five lowercase ASCII bytes so they are `Copy`, hash
//! cheaply and can be compared position by position without UTF-8 decoding.

use crate::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A five letter lowercase word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("'{0}' is not 5 letters long")]
    BadLength(String),
    #[error("'{0}' contains a character outside a-z")]
    NonAlphabetic(String),
}

impl Word {
    /// Build a word from raw bytes. Bytes must already be lowercase a-z.
    pub(crate) const fn from_bytes(bytes: [u8; WORD_LENGTH]) -> Self {
        let mut i = 0;
        while i < WORD_LENGTH {
            debug_assert!(bytes[i].is_ascii_lowercase());
            i += 1;
        }
        Self(bytes)
    }

    pub fn bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Letter at position `i`.
    pub fn at(&self, i: usize) -> u8 {
        self.0[i]
    }

    /// Number of times `letter` occurs in this word.
    pub fn letter_count(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&b| b == letter).count()
    }

    pub fn as_str(&self) -> &str {
        // only ever built from validated ASCII
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let bytes: [u8; WORD_LENGTH] = lower
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::BadLength(s.to_string()))?;
        if !bytes.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::NonAlphabetic(s.to_string()));
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?})", self.as_str())
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
