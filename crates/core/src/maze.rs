//! Maze generation
//!
//! Obstacles fill a tenth of the board. Playability is only approximated: after
//! placing the first food, the L-shaped corridor from the head down/up its column
//! and then along the food row is cleared. That does not prove the food is
//! reachable (the snake still has to get around), and some layouts are unwinnable.

use log::debug;

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::{Cell, Position};

/// Result of [`generate_maze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeLayout {
    /// Obstacles left on the board after the corridor was cleared
    pub obstacles: Vec<Position>,
    /// Food placed at the far end of the corridor
    pub food: Option<Position>,
    /// Obstacles removed to open the corridor
    pub cleared: usize,
}

/// Number of obstacles a `width x height` maze starts with.
pub fn obstacle_count(width: u16, height: u16) -> usize {
    (width as usize * height as usize) / 10
}

/// Scatter obstacles, place food and carve the corridor.
///
/// `head` is never covered by an obstacle.
pub fn generate_maze(board: &mut Board, head: Position, rng: &mut SimpleRng) -> MazeLayout {
    let wanted = obstacle_count(board.width(), board.height());
    let mut obstacles = Vec::with_capacity(wanted);

    for _ in 0..wanted {
        let Some(pos) = board.random_empty_except(rng, Some(head)) else {
            break;
        };
        board.set(pos, Cell::Obstacle);
        obstacles.push(pos);
    }

    let food = board.random_empty_except(rng, Some(head));
    let mut cleared = 0;
    if let Some(food) = food {
        board.set(food, Cell::Food);
        cleared = clear_corridor(board, head, food);
        obstacles.retain(|pos| board.get(*pos) == Some(Cell::Obstacle));
    }

    debug!(
        "maze: {} obstacles placed, {} cleared for corridor, food at {:?}",
        obstacles.len() + cleared,
        cleared,
        food
    );

    MazeLayout {
        obstacles,
        food,
        cleared,
    }
}

/// Clear obstacles on the head column between the two rows, then along the food
/// row between the two columns. Returns how many were removed.
fn clear_corridor(board: &mut Board, start: Position, food: Position) -> usize {
    let mut cleared = 0;
    let mut clear = |board: &mut Board, pos: Position| {
        if board.get(pos) == Some(Cell::Obstacle) {
            board.set(pos, Cell::Empty);
            cleared += 1;
        }
    };

    for row in start.row.min(food.row)..=start.row.max(food.row) {
        clear(board, Position::new(row, start.col));
    }
    for col in start.col.min(food.col)..=start.col.max(food.col) {
        clear(board, Position::new(food.row, col));
    }
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obstacle_count_is_a_tenth() {
        assert_eq!(obstacle_count(10, 10), 10);
        assert_eq!(obstacle_count(40, 20), 80);
        assert_eq!(obstacle_count(3, 3), 0);
    }

    #[test]
    fn ten_by_ten_places_ten_minus_cleared() {
        for seed in 1..50 {
            let mut board = Board::new(10, 10);
            let mut rng = SimpleRng::new(seed);
            let layout = generate_maze(&mut board, Position::new(0, 0), &mut rng);

            assert_eq!(layout.obstacles.len() + layout.cleared, 10, "seed {seed}");
            assert_eq!(board.count(|c| c == Cell::Obstacle), layout.obstacles.len());
        }
    }

    #[test]
    fn head_cell_is_never_an_obstacle() {
        let head = Position::new(4, 4);
        for seed in 1..30 {
            let mut board = Board::new(10, 10);
            let layout = generate_maze(&mut board, head, &mut SimpleRng::new(seed));
            assert!(!layout.obstacles.contains(&head));
            assert_eq!(board.get(head), Some(Cell::Empty));
        }
    }

    #[test]
    fn corridor_is_open() {
        let head = Position::new(0, 0);
        for seed in 1..30 {
            let mut board = Board::new(12, 9);
            let layout = generate_maze(&mut board, head, &mut SimpleRng::new(seed));
            let food = layout.food.expect("food placed");
            assert_eq!(board.get(food), Some(Cell::Food));

            for row in head.row.min(food.row)..=head.row.max(food.row) {
                assert_ne!(board.get(Position::new(row, head.col)), Some(Cell::Obstacle));
            }
            for col in head.col.min(food.col)..=head.col.max(food.col) {
                assert_ne!(board.get(Position::new(food.row, col)), Some(Cell::Obstacle));
            }
        }
    }

    #[test]
    fn clear_corridor_counts_removed_cells() {
        let mut board = Board::new(4, 4);
        board.set(Position::new(1, 0), Cell::Obstacle);
        board.set(Position::new(3, 2), Cell::Obstacle);
        board.set(Position::new(2, 2), Cell::Obstacle);
        let cleared = clear_corridor(&mut board, Position::new(0, 0), Position::new(3, 3));
        assert_eq!(cleared, 2);
        assert_eq!(board.get(Position::new(2, 2)), Some(Cell::Obstacle));
    }
}
