//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data types used throughout the workspace.
//! Everything here is dependency-free so it can be used by the simulation,
//! the renderer and the input router alike.
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs. Rows grow downwards and columns grow to the
//! right. Both are signed so a move can step off the board before the collision
//! check rejects it.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 200 | Initial tick interval |
//! | `MIN_TICK_MS` | 20 | Floor for the score speed-up rule |
//! | `SPEEDUP_SCORE_STEP` | 5 | Score milestone that triggers a speed-up |
//! | `SPEEDUP_STEP_MS` | 5 | Interval reduction per milestone |
//! | `POWERUP_DURATION_MS` | 10000 | Lifetime of an activated power-up |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GameMode, PowerUpKind};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(GameMode::from_str("maze"), Some(GameMode::Maze));
//! assert_eq!(Cell::from_code(-4), Some(Cell::PowerUp(PowerUpKind::GhostMode)));
//! assert_eq!(Cell::Obstacle.code(), 999);
//! ```

/// Default board width in cells.
pub const DEFAULT_BOARD_WIDTH: u16 = 40;

/// Default board height in cells.
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Initial tick interval in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 200;

/// The speed-up rule never pushes the interval below this.
pub const MIN_TICK_MS: u64 = 20;

/// Every time the score lands on a positive multiple of this, the game speeds up.
pub const SPEEDUP_SCORE_STEP: u32 = 5;

/// Interval reduction applied per score milestone.
pub const SPEEDUP_STEP_MS: u64 = 5;

/// How long an activated power-up lasts.
pub const POWERUP_DURATION_MS: u64 = 10_000;

/// Chance that a power-up spawns when a spawn is attempted.
pub const POWERUP_SPAWN_CHANCE: f32 = 0.2;

/// Length bonus granted by [`PowerUpKind::ExtraLength`].
pub const EXTRA_LENGTH_BONUS: u32 = 2;

/// Capacity of the queue between the input thread and the game loop.
pub const INPUT_QUEUE_CAPACITY: usize = 10;

/// Legacy integer code for a maze obstacle.
pub const OBSTACLE_CODE: i32 = 999;

/// Legacy integer code for food.
pub const FOOD_CODE: i32 = -1;


/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position one step away in `dir`, without any bounds handling.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}

/// Cardinal heading of the snake head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The 180° reverse of this heading.
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `(row, col)` offset of one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Game mode variants.
///
/// - **Normal**: walls are deadly, speed increases with score
/// - **NoWalls**: the snake wraps around the borders
/// - **Maze**: random obstacles are placed at game start
/// - **PowerUps**: collectable items grant timed effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Normal,
    NoWalls,
    Maze,
    PowerUps,
}

impl GameMode {
    /// Parse a mode name (case-insensitive).
    ///
    /// ```
    /// use tui_snake_types::GameMode;
    ///
    /// assert_eq!(GameMode::from_str("NoWalls"), Some(GameMode::NoWalls));
    /// assert_eq!(GameMode::from_str("powerups"), Some(GameMode::PowerUps));
    /// assert_eq!(GameMode::from_str("chess"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(GameMode::Normal),
            "nowalls" | "no-walls" => Some(GameMode::NoWalls),
            "maze" => Some(GameMode::Maze),
            "powerups" | "power-ups" => Some(GameMode::PowerUps),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Normal => "normal",
            GameMode::NoWalls => "nowalls",
            GameMode::Maze => "maze",
            GameMode::PowerUps => "powerups",
        }
    }

    /// One-line description shown on the welcome screen.
    pub fn description(&self) -> &'static str {
        match self {
            GameMode::Normal => "Normal - Classic Snake gameplay with increasing speed",
            GameMode::NoWalls => "No Walls - Snake can pass through borders",
            GameMode::Maze => "Maze - Navigate through randomly generated obstacles",
            GameMode::PowerUps => "Power-ups - Collect special items for unique abilities",
        }
    }
}

/// The five power-up effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Halves the tick interval
    SpeedUp,
    /// Doubles the tick interval
    SlowDown,
    /// Pass through walls and obstacles
    GhostMode,
    /// Grow by two segments
    ExtraLength,
    /// Food is worth twice as much
    DoublePoints,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::SpeedUp,
        PowerUpKind::SlowDown,
        PowerUpKind::GhostMode,
        PowerUpKind::ExtraLength,
        PowerUpKind::DoublePoints,
    ];

    /// Legacy board code (`-2..=-6`).
    pub fn code(self) -> i32 {
        match self {
            PowerUpKind::SpeedUp => -2,
            PowerUpKind::SlowDown => -3,
            PowerUpKind::GhostMode => -4,
            PowerUpKind::ExtraLength => -5,
            PowerUpKind::DoublePoints => -6,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -2 => Some(PowerUpKind::SpeedUp),
            -3 => Some(PowerUpKind::SlowDown),
            -4 => Some(PowerUpKind::GhostMode),
            -5 => Some(PowerUpKind::ExtraLength),
            -6 => Some(PowerUpKind::DoublePoints),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::SpeedUp => "Speed Up",
            PowerUpKind::SlowDown => "Slow Down",
            PowerUpKind::GhostMode => "Ghost Mode",
            PowerUpKind::ExtraLength => "Extra Length",
            PowerUpKind::DoublePoints => "Double Points",
        }
    }
}

/// Content of one board cell.
///
/// The snake body has no segment list: each cell it passed through carries an
/// age (`1` is the head) and ages out once it exceeds the snake length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Body(u32),
    Food,
    PowerUp(PowerUpKind),
    Obstacle,
}

impl Cell {
    /// Head marker.
    pub const HEAD: Cell = Cell::Body(1);

    /// Legacy integer encoding of the cell.
    pub fn code(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Body(age) => age as i32,
            Cell::Food => FOOD_CODE,
            Cell::PowerUp(kind) => kind.code(),
            Cell::Obstacle => OBSTACLE_CODE,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            OBSTACLE_CODE => Some(Cell::Obstacle),
            FOOD_CODE => Some(Cell::Food),
            c if c > 0 => Some(Cell::Body(c as u32)),
            c => PowerUpKind::from_code(c).map(Cell::PowerUp),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn is_body(self) -> bool {
        matches!(self, Cell::Body(age) if age > 0)
    }
}

/// Why a snake died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// Board edge or maze obstacle
    Wall,
    /// The snake ran into its own body
    Body,
}

impl Collision {
    pub fn message(self) -> &'static str {
        match self {
            Collision::Wall => "Game Over! Snake hit a wall!",
            Collision::Body => "Game Over! Snake collided with itself!",
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// The player asked to leave
    Quit,
    Collision(Collision),
}

/// Mode-agnostic control surface consumed by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Change heading
    Turn(Direction),
    /// Toggle pause state
    TogglePause,
    /// End the session
    Quit,
}

/// Item carried on the queue from the input thread to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    /// A key press with no game meaning (still counts for "press any key")
    Other,
}

/// Side effects forwarded to the notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    FoodEaten,
    PowerUpCollected(PowerUpKind),
    /// The session is over, for whatever reason
    GameOver(EndReason),
}
