//! Loading word lists from plain text, one word per line.
//!
//! Lines are trimmed and lowercased; anything that is not exactly five ASCII
//! letters is skipped, so the solver can rely on every [`Word`] being valid.

use crate::word::Word;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("could not read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list {0} holds no five letter words")]
    Empty(PathBuf),
}

/// Parse a word list, keeping file order and skipping malformed lines.
pub fn parse_dictionary(text: &str) -> Vec<Word> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match line.parse::<Word>() {
            Ok(word) => Some(word),
            Err(e) => {
                log::trace!("skipping dictionary line: {}", e);
                None
            }
        })
        .collect()
}

pub fn load_dictionary(path: &Path) -> Result<Vec<Word>, DictionaryError> {
    let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_dictionary(&text);
    if words.is_empty() {
        return Err(DictionaryError::Empty(path.to_path_buf()));
    }
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
