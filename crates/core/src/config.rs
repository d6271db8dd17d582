//! Session geometry, speed and glyphs.

use std::time::Duration;

use crate::types::{
    Cell, Direction, GameMode, Position, PowerUpKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH,
    DEFAULT_TICK_MS,
};

/// Two-column strings drawn for each cell kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: String,
    pub snake: String,
    pub head_right: String,
    pub head_left: String,
    pub head_vertical: String,
    pub food: String,
    pub maze: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            empty: "  ".to_string(),
            snake: "()".to_string(),
            head_right: ":)".to_string(),
            head_left: "(:".to_string(),
            head_vertical: "()".to_string(),
            food: "@@".to_string(),
            maze: "##".to_string(),
        }
    }
}

impl Glyphs {
    /// The head faces where it is going.
    pub fn head(&self, heading: Direction) -> &str {
        match heading {
            Direction::Right => &self.head_right,
            Direction::Left => &self.head_left,
            Direction::Up | Direction::Down => &self.head_vertical,
        }
    }

    pub fn power_up(&self, kind: PowerUpKind) -> &'static str {
        match kind {
            PowerUpKind::SpeedUp => "S+",
            PowerUpKind::SlowDown => "S-",
            PowerUpKind::GhostMode => "Gh",
            PowerUpKind::ExtraLength => "L+",
            PowerUpKind::DoublePoints => "x2",
        }
    }

    pub fn for_cell(&self, cell: Cell, heading: Direction) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::Body(1) => self.head(heading),
            Cell::Body(_) => &self.snake,
            Cell::Food => &self.food,
            Cell::PowerUp(kind) => self.power_up(kind),
            Cell::Obstacle => &self.maze,
        }
    }
}

/// Per-session configuration.
///
/// Geometry and glyphs are fixed for the session. `speed` changes as the game
/// goes on and `obstacles` is filled once by maze generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    /// Left margin in terminal columns
    pub offset_x: u16,
    /// Top margin in terminal rows
    pub offset_y: u16,
    /// Current tick interval
    pub speed: Duration,
    pub mode: GameMode,
    pub obstacles: Vec<Position>,
    pub glyphs: Glyphs,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT, GameMode::Normal)
    }
}

impl GameConfig {
    pub fn new(width: u16, height: u16, mode: GameMode) -> Self {
        Self {
            width,
            height,
            offset_x: 0,
            offset_y: 0,
            speed: Duration::from_millis(DEFAULT_TICK_MS),
            mode,
            obstacles: Vec::new(),
            glyphs: Glyphs::default(),
        }
    }

    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_offsets(mut self, offset_x: u16, offset_y: u16) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }
}
