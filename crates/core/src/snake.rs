//! Snake head, heading and length.
//!
//! The body itself lives on the board as aged cells; see [`crate::GameState::tick`].

use crate::types::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake {
    pub head: Position,
    pub heading: Direction,
    /// How many aged cells stay alive behind (and including) the head
    pub length: u32,
}

impl Snake {
    /// Snake at the top-left origin heading right, one cell long.
    pub fn new() -> Self {
        Self::at(Position::new(0, 0), Direction::Right)
    }

    pub fn at(head: Position, heading: Direction) -> Self {
        Self {
            head,
            heading,
            length: 1,
        }
    }

    /// Whether turning to `dir` would reverse straight into the neck.
    pub fn is_reversal(&self, dir: Direction) -> bool {
        dir == self.heading.opposite()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
