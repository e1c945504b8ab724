//! Aggregate results across solves, persisted as JSON between runs.

use crate::solver::SolveReport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("could not access stats file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("stats file {path} is not valid JSON")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub games: u64,
    pub wins: u64,
    /// Number of wins keyed by the guesses they took.
    pub distribution: BTreeMap<usize, u64>,
    /// Known targets that were not found within the round budget.
    pub failures: Vec<String>,
}

impl RunStats {
    pub fn record(&mut self, report: &SolveReport) {
        self.games += 1;
        if report.success {
            self.wins += 1;
            *self.distribution.entry(report.guess_count()).or_default() += 1;
        } else if let Some(target) = report.target {
            self.failures.push(target.to_string());
        }
    }

    pub fn merge(&mut self, other: &RunStats) {
        self.games += other.games;
        self.wins += other.wins;
        for (&guesses, &count) in &other.distribution {
            *self.distribution.entry(guesses).or_default() += count;
        }
        self.failures.extend(other.failures.iter().cloned());
    }

    /// Mean guesses over won games.
    pub fn average_guesses(&self) -> Option<f64> {
        if self.wins == 0 {
            return None;
        }
        let total: u64 = self
            .distribution
            .iter()
            .map(|(&guesses, &count)| guesses as u64 * count)
            .sum();
        Some(total as f64 / self.wins as f64)
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Read stats from `path`. A missing file is an empty history.
    pub fn load(path: &Path) -> Result<Self, StatsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no stats at {}, starting fresh", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StatsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| StatsError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), StatsError> {
        let text = serde_json::to_string_pretty(self).map_err(|source| StatsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, text).map_err(|source| StatsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
