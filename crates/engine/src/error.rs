//! Error types for session setup and score persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a session before the first frame.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Raw mode or the alternate screen could not be entered.
    #[error("terminal unavailable: {0}")]
    Terminal(#[source] io::Error),
    /// The keyboard reader thread could not be started.
    #[error("keyboard input unavailable: {0}")]
    Keyboard(#[source] io::Error),
}

/// Score file problems. Never fatal; the loop logs them and carries on.
#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("could not read scores from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write score to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
