//! Board size and placement derived from the terminal size.

use crossterm::terminal;

use crate::game_view::{GameView, FOOTER_ROWS};
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// Terminal size assumed when it cannot be queried.
pub const FALLBACK_TERMINAL: (u16, u16) = (80, 24);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
    pub offset_x: u16,
    pub offset_y: u16,
}

impl Geometry {
    /// Board of two thirds of the usable terminal, never smaller than the
    /// default board.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        let width = ((cols / 2) * 2 / 3).max(DEFAULT_BOARD_WIDTH);
        let height = (rows.saturating_sub(1) * 2 / 3).max(DEFAULT_BOARD_HEIGHT);
        Self::centered(width, height, cols, rows)
    }

    /// Fixed board size centered in the terminal.
    pub fn centered(width: u16, height: u16, cols: u16, rows: u16) -> Self {
        let (frame_w, _) = GameView::frame_size(width, height, 0, 0);
        let frame_h = height + 2 + FOOTER_ROWS;
        Self {
            width,
            height,
            offset_x: cols.saturating_sub(frame_w) / 2,
            offset_y: rows.saturating_sub(frame_h) / 2,
        }
    }
}

/// Current terminal size, or [`FALLBACK_TERMINAL`] when unknown.
pub fn terminal_size() -> (u16, u16) {
    terminal::size().unwrap_or_else(|err| {
        log::debug!("terminal size unavailable, using {FALLBACK_TERMINAL:?}: {err}");
        FALLBACK_TERMINAL
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_terminal_gets_minimum_board() {
        let g = Geometry::for_terminal(80, 24);
        assert_eq!((g.width, g.height), (40, 20));
        assert_eq!(g.offset_x, 0);
        assert_eq!(g.offset_y, 0);
    }

    #[test]
    fn large_terminal_scales_and_centers() {
        let g = Geometry::for_terminal(240, 61);
        assert_eq!((g.width, g.height), (80, 40));
        // frame is 162 columns by 47 rows
        assert_eq!(g.offset_x, 39);
        assert_eq!(g.offset_y, 7);
    }
}
