//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`]s and runs the
//! reader thread that feeds them to the game loop through a bounded channel.
//! Nothing here reads or writes game state.

pub mod map;
pub mod router;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit, to_input_event};
pub use router::{InputRouter, KeySource, TerminalKeys, POLL_INTERVAL};
