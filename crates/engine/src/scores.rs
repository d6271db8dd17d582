//! High-score persistence.
//!
//! Scores are newline-delimited decimal integers, one per finished session,
//! appended in play order.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::ScoreStoreError;

/// Default score file, relative to the working directory.
pub const DEFAULT_SCORE_FILE: &str = "Score.txt";

pub trait ScoreStore {
    /// Record one final score.
    fn append(&mut self, score: u32) -> Result<(), ScoreStoreError>;

    /// Best `n` scores, highest first.
    fn top_n(&self, n: usize) -> Result<Vec<u32>, ScoreStoreError>;
}

/// Scores kept in a plain text file.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_FILE)
    }
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn append(&mut self, score: u32) -> Result<(), ScoreStoreError> {
        let write_err = |source| ScoreStoreError::Write {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        writeln!(file, "{score}").map_err(write_err)?;
        debug!("saved score {score} to {}", self.path.display());
        Ok(())
    }

    fn top_n(&self, n: usize) -> Result<Vec<u32>, ScoreStoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ScoreStoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        Ok(best_scores(&text, n))
    }
}

/// Parse score lines, skipping anything that is not a number.
pub fn best_scores(text: &str, n: usize) -> Vec<u32> {
    let mut scores: Vec<u32> = text
        .lines()
        .filter_map(|line| line.trim().parse().ok())
        .collect();
    scores.sort_unstable_by(|a, b| b.cmp(a));
    scores.truncate(n);
    scores
}

/// In-memory store, for tests and runs without a score file.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    pub scores: Vec<u32>,
}

impl ScoreStore for MemoryScoreStore {
    fn append(&mut self, score: u32) -> Result<(), ScoreStoreError> {
        self.scores.push(score);
        Ok(())
    }

    fn top_n(&self, n: usize) -> Result<Vec<u32>, ScoreStoreError> {
        let mut scores = self.scores.clone();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(n);
        Ok(scores)
    }
}
