//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the snake simulation: the board, the snake, the per-mode
//! movement and collision rules, maze generation, power-ups and the tick that
//! ties them together. It has no terminal, thread or file dependencies.
//!
//! - **Deterministic**: placement draws from a seeded [`SimpleRng`]; time is passed in
//! - **Single writer**: only the owner of a [`GameState`] mutates it
//!
//! # Module Structure
//!
//! - [`board`]: row-major grid of [`types::Cell`]s with bounds checks
//! - [`snake`]: head position, heading and length
//! - [`rules`]: wrap-around and collision policy per [`types::GameMode`]
//! - [`maze`]: obstacle scattering with a cleared corridor to the first food
//! - [`powerups`]: spawn roll and time-limited effects
//! - [`config`]: geometry, tick interval and glyphs
//! - [`game_state`]: aggregate root and the tick state machine
//!
//! # Body Encoding
//!
//! There is no segment list. Each tick every body cell's age goes up by one and
//! cells older than the snake's length are cleared; the new head is stamped with
//! age 1. Growing is just raising the length.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use tui_snake_core::{GameConfig, GameState};
//! use tui_snake_types::{Direction, GameAction, GameMode};
//!
//! let mut game = GameState::new(GameConfig::new(20, 10, GameMode::NoWalls), 7);
//! game.start();
//!
//! game.apply_action(GameAction::Turn(Direction::Down));
//! let outcome = game.tick(Instant::now());
//!
//! assert!(outcome.advanced);
//! assert_eq!(game.snake().head.row, 1);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod maze;
pub mod powerups;
pub mod rng;
pub mod rules;
pub mod snake;

pub use tui_snake_types as types;

pub use board::Board;
pub use config::{GameConfig, Glyphs};
pub use game_state::{EndReason, GameState, Phase, TickOutcome};
pub use maze::{generate_maze, obstacle_count, MazeLayout};
pub use powerups::{maybe_spawn, PowerUp, PowerUpRegistry};
pub use rng::SimpleRng;
pub use rules::ModeRules;
pub use snake::Snake;
