//! Game state module - the aggregate root and its tick
//!
//! `GameState` ties the board, snake, power-ups and RNG together. It is owned by
//! the game loop and only ever mutated from that one thread; input arrives as
//! [`GameAction`]s and time arrives as [`GameState::tick`] calls.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::maze::generate_maze;
use crate::powerups::{maybe_spawn, PowerUpRegistry};
use crate::rng::SimpleRng;
use crate::rules::ModeRules;
use crate::snake::Snake;
use crate::types::{
    Cell, Collision, GameAction, GameEvent, GameMode, Position, MIN_TICK_MS, SPEEDUP_SCORE_STEP,
    SPEEDUP_STEP_MS,
};

pub use crate::types::EndReason;

/// Coarse state machine view of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    Ended(EndReason),
}

/// What a single tick did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The snake advanced (false when paused or already ended)
    pub advanced: bool,
    pub events: ArrayVec<GameEvent, 4>,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    snake: Snake,
    board: Board,
    powerups: PowerUpRegistry,
    rng: SimpleRng,
    score: u32,
    exit_game: bool,
    exit_cause: Option<Collision>,
    paused: bool,
    relaxed: bool,
    started: bool,
}

impl GameState {
    /// Create a session. The board stays empty until [`GameState::start`].
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let board = Board::new(config.width, config.height);
        Self {
            config,
            snake: Snake::new(),
            board,
            powerups: PowerUpRegistry::new(),
            rng: SimpleRng::new(seed),
            score: 0,
            exit_game: false,
            exit_cause: None,
            paused: false,
            relaxed: false,
            started: false,
        }
    }

    /// Relaxed mode keeps the tick interval free of score speed-ups.
    pub fn with_relaxed(mut self, relaxed: bool) -> Self {
        self.relaxed = relaxed;
        self
    }

    /// Lay out the board for the configured mode and stamp the head.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        let head = self.snake.head;
        match self.config.mode {
            GameMode::Maze => {
                let layout = generate_maze(&mut self.board, head, &mut self.rng);
                self.config.obstacles = layout.obstacles;
                if layout.food.is_none() {
                    self.place_food();
                }
            }
            GameMode::PowerUps => {
                maybe_spawn(self.config.mode, &mut self.board, &mut self.rng, Some(head));
                self.place_food();
            }
            GameMode::Normal | GameMode::NoWalls => {
                self.place_food();
            }
        }
        self.board.set(head, Cell::HEAD);

        info!(
            "session started: mode={} board={}x{} speed={:?} relaxed={}",
            self.config.mode.as_str(),
            self.config.width,
            self.config.height,
            self.config.speed,
            self.relaxed
        );
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> Phase {
        if self.exit_game {
            Phase::Ended(match self.exit_cause {
                Some(c) => EndReason::Collision(c),
                None => EndReason::Quit,
            })
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    pub fn exit_game(&self) -> bool {
        self.exit_game
    }

    /// Collision that ended the session, if any.
    pub fn exit_cause(&self) -> Option<Collision> {
        self.exit_cause
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn relaxed(&self) -> bool {
        self.relaxed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> Duration {
        self.config.speed
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn powerups(&self) -> &PowerUpRegistry {
        &self.powerups
    }

    /// Direct board access for building scenarios.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Move the snake for a scenario, stamping the head marker.
    pub fn place_snake(&mut self, snake: Snake) {
        if self.board.get(self.snake.head) == Some(Cell::HEAD) {
            self.board.set(self.snake.head, Cell::Empty);
        }
        self.snake = snake;
        self.board.set(snake.head, Cell::HEAD);
        self.started = true;
    }

    /// Rules in force for the next move.
    pub fn rules(&self) -> ModeRules {
        ModeRules::new(self.config.mode, self.powerups.ghost())
    }

    /// Apply one control input.
    ///
    /// Turns are ignored while paused, after the end, and when they would reverse
    /// the snake onto its own neck. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.exit_game {
            return false;
        }

        match action {
            GameAction::Quit => {
                self.exit_game = true;
                info!("quit requested at score {}", self.score);
                true
            }
            GameAction::TogglePause => {
                self.paused = !self.paused;
                true
            }
            GameAction::Turn(dir) => {
                if self.paused || self.snake.is_reversal(dir) || self.snake.heading == dir {
                    return false;
                }
                self.snake.heading = dir;
                true
            }
        }
    }

    /// Advance the simulation by one step.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let mut out = TickOutcome::default();
        if self.exit_game || self.paused {
            return out;
        }
        out.advanced = true;

        let rules = self.rules();
        let head = rules.resolve_move(
            self.snake.head,
            self.snake.heading,
            self.board.width(),
            self.board.height(),
        );
        self.snake.head = head;

        if let Some(collision) = rules.detect_collision(&self.board, head) {
            self.exit_game = true;
            self.exit_cause = Some(collision);
            out.events
                .push(GameEvent::GameOver(EndReason::Collision(collision)));
            info!(
                "session ended: {:?} at {:?}, score {}",
                collision, head, self.score
            );
            return out;
        }

        let mut ate = false;
        match self.board.get(head) {
            Some(Cell::Food) => {
                ate = true;
                self.score += self.powerups.multiplier();
                self.snake.length += 1;
                self.board.set(head, Cell::Empty);
                self.place_food();
                if let Some((pos, kind)) =
                    maybe_spawn(self.config.mode, &mut self.board, &mut self.rng, Some(head))
                {
                    debug!("spawned {:?} at {:?}", kind, pos);
                }
                out.events.push(GameEvent::FoodEaten);
            }
            Some(Cell::PowerUp(kind)) => {
                self.powerups.activate(
                    kind,
                    now,
                    &mut self.config.speed,
                    &mut self.snake.length,
                );
                self.board.set(head, Cell::Empty);
                out.events.push(GameEvent::PowerUpCollected(kind));
            }
            _ => {}
        }

        self.powerups
            .expire_due(now, &mut self.config.speed, &mut self.snake.length);

        self.age_body();

        if self.config.mode == GameMode::Maze {
            for &pos in &self.config.obstacles {
                self.board.set(pos, Cell::Obstacle);
            }
        }
        self.board.set(head, Cell::HEAD);

        if ate && !self.relaxed && self.score > 0 && self.score % SPEEDUP_SCORE_STEP == 0 {
            let floor = Duration::from_millis(MIN_TICK_MS);
            let step = Duration::from_millis(SPEEDUP_STEP_MS);
            // An interval already under the floor (a live SpeedUp) is left alone.
            if self.config.speed > floor {
                self.config.speed = self.config.speed.saturating_sub(step).max(floor);
            }
            debug!("score {} reached, speed now {:?}", self.score, self.config.speed);
        }

        out
    }

    /// Age every body cell, dropping the ones older than the snake is long.
    fn age_body(&mut self) {
        let length = self.snake.length;
        for cell in self.board.cells_mut() {
            if let Cell::Body(age) = *cell {
                let aged = age + 1;
                *cell = if aged > length {
                    Cell::Empty
                } else {
                    Cell::Body(aged)
                };
            }
        }
    }

    /// Replace all food with one new food on an empty cell other than the head.
    fn place_food(&mut self) -> Option<Position> {
        self.board.clear_food();
        let pos = self
            .board
            .random_empty_except(&mut self.rng, Some(self.snake.head))?;
        self.board.set(pos, Cell::Food);
        Some(pos)
    }
}
