//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders a session into a simple framebuffer and hands whole frames to a
//! [`FrameSink`]; there are no widgets or partial updates.
//!
//! - [`game_view`]: pure mapping from `GameState` to a frame
//! - [`renderer`]: terminal and capture sinks, raw-mode session guard
//! - [`geometry`]: board size and offsets from the terminal size
//! - `signals`: terminal restore on SIGTERM, SIGHUP and SIGINT (unix)

pub mod fb;
pub mod game_view;
pub mod geometry;
pub mod renderer;
#[cfg(unix)]
pub mod signals;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{border_color, GameView, BORDER_CHAR, CONTINUE_PROMPT, FOOTER_ROWS};
pub use geometry::{terminal_size, Geometry};
pub use renderer::{
    encode_full_into, restore_terminal, CaptureSink, FrameSink, TerminalRenderer, TerminalSession,
};
#[cfg(unix)]
pub use signals::{exit_code, SignalRestore, TERMINATING_SIGNALS};
