//! Mode rules - movement and collision policy per game mode
//!
//! Pure functions keyed by the game mode and the ghost flag. Nothing here mutates
//! the board; the simulator applies the results.

use crate::board::Board;
use crate::types::{Cell, Collision, Direction, GameMode, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeRules {
    pub mode: GameMode,
    /// Ghost power-up active
    pub ghost: bool,
}

impl ModeRules {
    pub fn new(mode: GameMode, ghost: bool) -> Self {
        Self { mode, ghost }
    }

    /// Whether moves wrap around the board edges.
    pub fn wraps(&self) -> bool {
        self.mode == GameMode::NoWalls || self.ghost
    }

    /// One step from `pos` towards `heading`.
    ///
    /// Wrapping modes fold the result back onto a `width x height` board; other
    /// modes may return a position outside it.
    pub fn resolve_move(
        &self,
        pos: Position,
        heading: Direction,
        width: u16,
        height: u16,
    ) -> Position {
        let next = pos.step(heading);
        if !self.wraps() || width == 0 || height == 0 {
            return next;
        }
        Position::new(
            next.row.rem_euclid(height as i32),
            next.col.rem_euclid(width as i32),
        )
    }

    /// Classify what the head hit, if anything.
    ///
    /// Wall (edge or obstacle) is checked before the body so a head that is both
    /// out of bounds and on a segment reports `Wall`.
    pub fn detect_collision(&self, board: &Board, head: Position) -> Option<Collision> {
        let cell = board.get(head);

        if self.mode != GameMode::NoWalls && !self.ghost && cell.is_none() {
            return Some(Collision::Wall);
        }

        if self.mode == GameMode::Maze && !self.ghost && cell == Some(Cell::Obstacle) {
            return Some(Collision::Wall);
        }

        match cell {
            Some(c) if c.is_body() => Some(Collision::Body),
            _ => None,
        }
    }
}
