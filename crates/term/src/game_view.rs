//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom, starting at the configured offsets: a border row, one
//! row per board row (two columns per cell between `#` walls), a border row, a
//! blank row and then the footer lines.

use std::fmt::Write as _;
use std::time::Instant;

use crate::core::{EndReason, GameState, Phase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, GameMode};

/// Rows under the bottom border: blank, score, effects, status, prompt.
pub const FOOTER_ROWS: u16 = 5;

pub const BORDER_CHAR: char = '#';

pub const CONTINUE_PROMPT: &str = "Press any key to continue...";

const RED: Rgb = Rgb::new(220, 70, 70);
const GREEN: Rgb = Rgb::new(90, 210, 110);
const WHITE: Rgb = Rgb::new(230, 230, 230);
const YELLOW: Rgb = Rgb::new(240, 210, 80);
const CYAN: Rgb = Rgb::new(80, 210, 220);

/// Border color per mode.
pub fn border_color(mode: GameMode) -> Rgb {
    match mode {
        GameMode::NoWalls => GREEN,
        GameMode::Normal | GameMode::Maze => RED,
        GameMode::PowerUps => WHITE,
    }
}

/// Renders a session into text frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Frame size needed for a board of `width` x `height` cells at the given
    /// offsets, before footer text is accounted for.
    pub fn frame_size(width: u16, height: u16, offset_x: u16, offset_y: u16) -> (u16, u16) {
        (
            offset_x + width * 2 + 2,
            offset_y + height + 2 + FOOTER_ROWS,
        )
    }

    /// Render into an existing framebuffer, resizing it as needed.
    pub fn render_into(&self, state: &GameState, now: Instant, fb: &mut FrameBuffer) {
        let cfg = state.config();
        let board = state.board();
        let (w, h) = (board.width(), board.height());
        let x0 = cfg.offset_x;
        let y0 = cfg.offset_y;

        let footer = footer_lines(state, now);
        let text_w = footer
            .iter()
            .map(|(line, _)| line.chars().count() as u16)
            .max()
            .unwrap_or(0);
        let (frame_w, frame_h) = Self::frame_size(w, h, x0, y0);
        fb.resize(frame_w.max(x0 + text_w), frame_h);
        fb.clear();

        let border = CellStyle::fg(border_color(state.mode()));
        let right = x0 + 1 + w * 2;
        for x in x0..=right {
            fb.put_char(x, y0, BORDER_CHAR, border);
            fb.put_char(x, y0 + h + 1, BORDER_CHAR, border);
        }

        let heading = state.snake().heading;
        for (pos, cell) in board.iter() {
            let glyph = cfg.glyphs.for_cell(cell, heading);
            let style = cell_style(cell);
            let px = x0 + 1 + (pos.col as u16) * 2;
            let py = y0 + 1 + pos.row as u16;
            fb.put_str(px, py, glyph, style);
        }
        for row in 0..h {
            fb.put_char(x0, y0 + 1 + row, BORDER_CHAR, border);
            fb.put_char(right, y0 + 1 + row, BORDER_CHAR, border);
        }

        match state.phase() {
            Phase::Paused => draw_overlay(fb, x0, y0, w, h, "PAUSED"),
            Phase::Ended(EndReason::Collision(_)) => draw_overlay(fb, x0, y0, w, h, "GAME OVER"),
            Phase::Ended(EndReason::Quit) | Phase::Running => {}
        }

        let mut y = y0 + h + 3;
        for (line, style) in &footer {
            fb.put_str(x0, y, line, *style);
            y += 1;
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, now: Instant) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(state, now, &mut fb);
        fb
    }
}

fn cell_style(cell: Cell) -> CellStyle {
    match cell {
        Cell::Empty => CellStyle::default(),
        Cell::Body(1) => CellStyle::fg(GREEN).bold(),
        Cell::Body(_) => CellStyle::fg(GREEN),
        Cell::Food => CellStyle::fg(RED).bold(),
        Cell::PowerUp(_) => CellStyle::fg(CYAN).bold(),
        Cell::Obstacle => CellStyle::fg(RED),
    }
}

/// Footer rows in order: score, effects, status, prompt. Empty strings keep
/// their row.
fn footer_lines(state: &GameState, now: Instant) -> [(String, CellStyle); 4] {
    let plain = CellStyle::default();

    let score = format!("Score: {}", state.score());

    let mut effects = String::new();
    if state.mode() == GameMode::PowerUps {
        effects.push_str("Active Effects:");
        let mut any = false;
        for p in state.powerups().active() {
            let remaining = p.remaining(now);
            if remaining.is_zero() {
                continue;
            }
            any = true;
            let _ = write!(
                effects,
                " {} ({:.1}s)",
                p.kind.label(),
                remaining.as_secs_f32()
            );
        }
        if !any {
            effects.push_str(" None");
        }
    }

    let (status, prompt) = match state.phase() {
        Phase::Running => (String::new(), String::new()),
        Phase::Paused => ("Paused - press 'p' to resume".to_string(), String::new()),
        Phase::Ended(EndReason::Collision(c)) => {
            (c.message().to_string(), CONTINUE_PROMPT.to_string())
        }
        Phase::Ended(EndReason::Quit) => (String::new(), CONTINUE_PROMPT.to_string()),
    };

    [
        (score, plain.bold()),
        (effects, CellStyle::fg(CYAN)),
        (status, CellStyle::fg(YELLOW).bold()),
        (prompt, plain),
    ]
}

fn draw_overlay(fb: &mut FrameBuffer, x0: u16, y0: u16, w: u16, h: u16, text: &str) {
    let inner_w = w * 2;
    let text_w = text.chars().count() as u16;
    let x = x0 + 1 + inner_w.saturating_sub(text_w) / 2;
    let y = y0 + 1 + h / 2;
    fb.put_str(x, y, text, CellStyle::fg(WHITE).bold());
}
