//! Session engine: the game loop and the collaborators it drives.
//!
//! The loop owns the only mutable `GameState`. Around it sit three seams, each
//! a trait so tests and headless runs can swap them:
//!
//! - [`term::FrameSink`] receives every rendered frame
//! - [`Notifier`] plays sounds for game events
//! - [`ScoreStore`] keeps final scores

pub mod error;
pub mod game_loop;
pub mod notifier;
pub mod scores;
pub mod startup;

pub use tui_snake_core as core;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub use error::{ScoreStoreError, SetupError};
pub use game_loop::{GameLoop, SessionOutcome};
pub use notifier::{
    beep_count, rings, AudioSession, BellNotifier, Notifier, RecordingNotifier, SilentNotifier,
};
pub use scores::{best_scores, FileScoreStore, MemoryScoreStore, ScoreStore, DEFAULT_SCORE_FILE};
pub use startup::StartupConfig;
