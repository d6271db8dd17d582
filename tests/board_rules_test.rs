//! Board and movement rule tests against the facade crate.

use proptest::prelude::*;

use tui_snake::core::{generate_maze, obstacle_count, Board, ModeRules, SimpleRng};
use tui_snake::types::{Cell, Collision, Direction, GameMode, Position, PowerUpKind};

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

#[test]
fn legacy_codes_survive_a_board() {
    let board = Board::from_codes(&[&[0, 1, 2], &[-1, -4, 999]]);
    assert_eq!(board.get(Position::new(0, 1)), Some(Cell::HEAD));
    assert_eq!(board.get(Position::new(0, 2)), Some(Cell::Body(2)));
    assert_eq!(board.get(Position::new(1, 0)), Some(Cell::Food));
    assert_eq!(
        board.get(Position::new(1, 1)),
        Some(Cell::PowerUp(PowerUpKind::GhostMode))
    );
    assert_eq!(board.get(Position::new(1, 2)), Some(Cell::Obstacle));
    assert_eq!(board.to_codes(), vec![vec![0, 1, 2], vec![-1, -4, 999]]);
}

#[test]
fn random_empty_finds_the_last_hole() {
    let mut board = Board::from_codes(&[&[999, 999], &[999, 0]]);
    let mut rng = SimpleRng::new(5);
    assert_eq!(board.random_empty(&mut rng), Some(Position::new(1, 1)));

    board.set(Position::new(1, 1), Cell::Food);
    assert_eq!(board.random_empty(&mut rng), None);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn writing_off_the_board_panics() {
    let mut board = Board::new(3, 3);
    board.set(Position::new(3, 0), Cell::Food);
}

#[test]
fn wall_is_reported_before_body() {
    let board = Board::from_codes(&[&[999, 3]]);
    let rules = ModeRules::new(GameMode::Maze, false);
    assert_eq!(
        rules.detect_collision(&board, Position::new(0, 0)),
        Some(Collision::Wall)
    );
    assert_eq!(
        rules.detect_collision(&board, Position::new(0, 1)),
        Some(Collision::Body)
    );
    assert_eq!(
        rules.detect_collision(&board, Position::new(0, 2)),
        Some(Collision::Wall)
    );
}

#[test]
fn ghost_passes_walls_but_not_body() {
    let board = Board::from_codes(&[&[999, 2, 0]]);
    let rules = ModeRules::new(GameMode::Maze, true);
    assert_eq!(rules.detect_collision(&board, Position::new(0, 0)), None);
    assert_eq!(
        rules.detect_collision(&board, Position::new(0, 1)),
        Some(Collision::Body)
    );
}

#[test]
fn nowalls_wraps_top_edge_to_bottom() {
    let rules = ModeRules::new(GameMode::NoWalls, false);
    assert_eq!(
        rules.resolve_move(Position::new(0, 3), Direction::Up, 8, 8),
        Position::new(7, 3)
    );
}

#[test]
fn maze_on_ten_by_ten() {
    let mut board = Board::new(10, 10);
    let mut rng = SimpleRng::new(2024);
    let head = Position::new(0, 0);
    let layout = generate_maze(&mut board, head, &mut rng);

    assert_eq!(obstacle_count(10, 10), 10);
    assert_eq!(layout.obstacles.len(), 10 - layout.cleared);
    assert_eq!(board.count(|c| c == Cell::Obstacle), layout.obstacles.len());
    assert_ne!(board.get(head), Some(Cell::Obstacle));
    assert_eq!(board.count(|c| c == Cell::Food), 1);
}

proptest! {
    #[test]
    fn walled_moves_inside_never_wrap(
        row in 0i32..16,
        col in 0i32..16,
        dir in direction(),
    ) {
        let rules = ModeRules::new(GameMode::Normal, false);
        let pos = Position::new(row, col);
        let (dr, dc) = dir.delta();
        prop_assert_eq!(
            rules.resolve_move(pos, dir, 16, 16),
            Position::new(row + dr, col + dc)
        );
    }

    #[test]
    fn wrapping_moves_stay_on_board(
        row in 0i32..12,
        col in 0i32..20,
        dir in direction(),
        ghost in any::<bool>(),
    ) {
        let mode = if ghost { GameMode::Normal } else { GameMode::NoWalls };
        let rules = ModeRules::new(mode, ghost);
        let next = rules.resolve_move(Position::new(row, col), dir, 20, 12);
        prop_assert!(next.row >= 0 && next.row < 12);
        prop_assert!(next.col >= 0 && next.col < 20);
    }

    #[test]
    fn opposite_steps_cancel(
        row in 0i32..10,
        col in 0i32..10,
        dir in direction(),
    ) {
        let rules = ModeRules::new(GameMode::NoWalls, false);
        let start = Position::new(row, col);
        let there = rules.resolve_move(start, dir, 10, 10);
        prop_assert_eq!(rules.resolve_move(there, dir.opposite(), 10, 10), start);
    }
}
