use std::time::Instant;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{generate_maze, Board, GameConfig, GameState, SimpleRng};
use tui_snake::term::{FrameBuffer, GameView};
use tui_snake::types::{GameMode, Position};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::new(40, 20, GameMode::NoWalls), 12345);
    state.start();

    c.bench_function("tick_nowalls_40x20", |b| {
        b.iter(|| {
            black_box(state.tick(Instant::now()));
        })
    });
}

fn bench_maze(c: &mut Criterion) {
    c.bench_function("generate_maze_40x20", |b| {
        let mut rng = SimpleRng::new(7);
        b.iter(|| {
            let mut board = Board::new(40, 20);
            black_box(generate_maze(&mut board, Position::new(0, 0), &mut rng));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::new(40, 20, GameMode::PowerUps), 99);
    state.start();
    let view = GameView::new();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_frame_40x20", |b| {
        b.iter(|| {
            view.render_into(black_box(&state), Instant::now(), &mut fb);
        })
    });
}

fn bench_random_empty(c: &mut Criterion) {
    let mut rng = SimpleRng::new(3);
    let board = Board::new(40, 20);

    c.bench_function("random_empty", |b| {
        b.iter(|| black_box(board.random_empty(&mut rng)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_maze,
    bench_render,
    bench_random_empty
);
criterion_main!(benches);
