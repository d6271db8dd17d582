//! Tick-level scenarios for `GameState`.

use std::time::{Duration, Instant};

use tui_snake::core::{EndReason, GameConfig, GameState, Phase, PowerUpRegistry, Snake};
use tui_snake::types::{
    Cell, Collision, Direction, GameAction, GameEvent, GameMode, Position, PowerUpKind,
    POWERUP_DURATION_MS,
};

fn game(mode: GameMode, w: u16, h: u16, head: Position, heading: Direction) -> GameState {
    let mut state = GameState::new(GameConfig::new(w, h, mode), 77);
    state.place_snake(Snake::at(head, heading));
    state
}

fn food_count(state: &GameState) -> usize {
    state.board().count(|c| c == Cell::Food)
}

fn body_count(state: &GameState) -> usize {
    state.board().count(|c| c.is_body())
}

#[test]
fn eating_grows_and_scores() {
    let mut state = game(GameMode::Normal, 8, 8, Position::new(4, 4), Direction::Right);
    state.board_mut().set(Position::new(4, 5), Cell::Food);

    let out = state.tick(Instant::now());

    assert_eq!(out.events.as_slice(), &[GameEvent::FoodEaten]);
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake().length, 2);
    assert_eq!(state.snake().head, Position::new(4, 5));
    assert_eq!(state.board().get(Position::new(4, 5)), Some(Cell::HEAD));
    assert_eq!(state.board().get(Position::new(4, 4)), Some(Cell::Body(2)));
    assert_eq!(food_count(&state), 1);
}

#[test]
fn food_is_replaced_not_duplicated() {
    let mut state = game(GameMode::NoWalls, 20, 20, Position::new(0, 0), Direction::Right);
    let now = Instant::now();
    for col in 1..=4 {
        state.board_mut().clear_food();
        state.board_mut().set(Position::new(0, col), Cell::Food);
        state.tick(now);
        assert_eq!(food_count(&state), 1);
        assert_ne!(state.board().get(state.snake().head), Some(Cell::Food));
    }
    assert_eq!(state.score(), 4);
}

#[test]
fn body_cells_match_length_after_each_tick() {
    let mut state = game(GameMode::NoWalls, 20, 20, Position::new(5, 0), Direction::Right);
    let now = Instant::now();

    for step in 0..15 {
        if step < 3 {
            state.board_mut().clear_food();
            state.board_mut().set(Position::new(5, step + 1), Cell::Food);
        }
        state.tick(now);
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(body_count(&state), state.snake().length as usize);
    }
    assert!(state.snake().length >= 4);
}

#[test]
fn nowalls_wraps_through_the_top() {
    let mut state = game(GameMode::NoWalls, 8, 8, Position::new(0, 3), Direction::Up);
    state.tick(Instant::now());
    assert_eq!(state.snake().head, Position::new(7, 3));
    assert_eq!(state.phase(), Phase::Running);
}

#[test]
fn leaving_a_walled_board_ends_with_wall_and_no_mutation() {
    let mut state = game(GameMode::Normal, 8, 8, Position::new(0, 3), Direction::Up);
    let before = state.board().clone();

    let out = state.tick(Instant::now());

    assert_eq!(
        out.events.as_slice(),
        &[GameEvent::GameOver(EndReason::Collision(Collision::Wall))]
    );
    assert_eq!(state.exit_cause(), Some(Collision::Wall));
    assert_eq!(state.board(), &before);
    assert!(!state.tick(Instant::now()).advanced);
}

#[test]
fn running_into_the_body_ends_with_body() {
    let mut state = game(GameMode::Normal, 8, 8, Position::new(2, 2), Direction::Right);
    state.board_mut().set(Position::new(2, 3), Cell::Body(3));
    state.tick(Instant::now());
    assert_eq!(state.exit_cause(), Some(Collision::Body));
}

#[test]
fn maze_start_keeps_layout_and_corridor_food() {
    let mut state = GameState::new(GameConfig::new(10, 10, GameMode::Maze), 4);
    state.start();

    let obstacles = state.config().obstacles.len();
    assert!(obstacles <= 10);
    assert_eq!(state.board().count(|c| c == Cell::Obstacle), obstacles);
    assert_eq!(food_count(&state), 1);
    assert_eq!(state.board().get(Position::new(0, 0)), Some(Cell::HEAD));
}

#[test]
fn speed_up_wears_off() {
    let mut state = game(GameMode::PowerUps, 8, 8, Position::new(3, 2), Direction::Right);
    state
        .board_mut()
        .set(Position::new(3, 3), Cell::PowerUp(PowerUpKind::SpeedUp));
    let start = Instant::now();

    let out = state.tick(start);
    assert_eq!(
        out.events.as_slice(),
        &[GameEvent::PowerUpCollected(PowerUpKind::SpeedUp)]
    );
    assert_eq!(state.speed(), Duration::from_millis(100));

    // Still active exactly at expiry.
    state.tick(start + Duration::from_millis(POWERUP_DURATION_MS));
    assert_eq!(state.speed(), Duration::from_millis(100));

    state.tick(start + Duration::from_millis(POWERUP_DURATION_MS + 1));
    assert_eq!(state.speed(), Duration::from_millis(200));
    assert!(state.powerups().active().is_empty());
}

#[test]
fn stacked_effects_reverse_independently() {
    let mut registry = PowerUpRegistry::new();
    let mut speed = Duration::from_millis(200);
    let mut length = 3;
    let t0 = Instant::now();

    registry.activate(PowerUpKind::SpeedUp, t0, &mut speed, &mut length);
    registry.activate(PowerUpKind::SpeedUp, t0, &mut speed, &mut length);
    registry.activate(PowerUpKind::ExtraLength, t0, &mut speed, &mut length);
    assert_eq!(speed, Duration::from_millis(50));
    assert_eq!(length, 5);

    let later = t0 + Duration::from_millis(POWERUP_DURATION_MS + 1);
    assert_eq!(registry.expire_due(later, &mut speed, &mut length), 3);
    assert_eq!(speed, Duration::from_millis(200));
    assert_eq!(length, 3);
}

#[test]
fn double_points_doubles_food() {
    let mut state = game(GameMode::PowerUps, 8, 8, Position::new(1, 1), Direction::Right);
    state
        .board_mut()
        .set(Position::new(1, 2), Cell::PowerUp(PowerUpKind::DoublePoints));
    state.board_mut().set(Position::new(1, 3), Cell::Food);
    let now = Instant::now();

    state.tick(now);
    state.tick(now);
    assert_eq!(state.score(), 2);
}

#[test]
fn pause_freezes_the_board() {
    let mut state = game(GameMode::Normal, 8, 8, Position::new(3, 3), Direction::Right);
    assert!(state.apply_action(GameAction::TogglePause));
    let before = state.board().clone();

    let out = state.tick(Instant::now());
    assert!(!out.advanced);
    assert!(!state.apply_action(GameAction::Turn(Direction::Up)));
    assert_eq!(state.board(), &before);
    assert_eq!(state.phase(), Phase::Paused);

    assert!(state.apply_action(GameAction::TogglePause));
    assert!(state.tick(Instant::now()).advanced);
    assert_eq!(state.snake().head, Position::new(3, 4));
}

#[test]
fn reverse_turns_are_ignored() {
    let mut state = game(GameMode::Normal, 8, 8, Position::new(3, 3), Direction::Right);
    assert!(!state.apply_action(GameAction::Turn(Direction::Left)));
    assert!(state.apply_action(GameAction::Turn(Direction::Down)));
    assert!(!state.apply_action(GameAction::Turn(Direction::Up)));
    assert_eq!(state.snake().heading, Direction::Down);
}

#[test]
fn every_fifth_point_speeds_up_unless_relaxed() {
    for relaxed in [false, true] {
        let cfg = GameConfig::new(20, 20, GameMode::NoWalls);
        let mut state = GameState::new(cfg, 9).with_relaxed(relaxed);
        state.place_snake(Snake::at(Position::new(0, 0), Direction::Right));
        let now = Instant::now();
        for col in 1..=5 {
            state.board_mut().clear_food();
            state.board_mut().set(Position::new(0, col), Cell::Food);
            state.tick(now);
        }
        assert_eq!(state.score(), 5);
        let expected = if relaxed { 200 } else { 195 };
        assert_eq!(state.speed(), Duration::from_millis(expected));
    }
}
