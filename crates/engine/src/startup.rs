//! Session settings gathered before the game starts.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::{GameConfig, GameState};
use crate::scores::DEFAULT_SCORE_FILE;
use crate::term::Geometry;
use crate::types::{GameMode, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub mode: GameMode,
    /// Initial tick interval
    pub speed: Duration,
    /// Keep the interval constant regardless of score
    pub relaxed: bool,
    pub sound: bool,
    /// Board size override; `None` sizes the board from the terminal
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub score_path: PathBuf,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u32>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Normal,
            speed: Duration::from_millis(DEFAULT_TICK_MS),
            relaxed: false,
            sound: true,
            width: None,
            height: None,
            score_path: PathBuf::from(DEFAULT_SCORE_FILE),
            seed: None,
        }
    }
}

impl StartupConfig {
    /// Board size and placement for a terminal of `cols` x `rows`.
    pub fn geometry(&self, cols: u16, rows: u16) -> Geometry {
        match (self.width, self.height) {
            (None, None) => Geometry::for_terminal(cols, rows),
            (w, h) => Geometry::centered(
                w.unwrap_or(DEFAULT_BOARD_WIDTH),
                h.unwrap_or(DEFAULT_BOARD_HEIGHT),
                cols,
                rows,
            ),
        }
    }

    pub fn game_config(&self, cols: u16, rows: u16) -> GameConfig {
        let g = self.geometry(cols, rows);
        GameConfig::new(g.width, g.height, self.mode)
            .with_speed(self.speed)
            .with_offsets(g.offset_x, g.offset_y)
    }

    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }

    /// Fresh, not yet started session.
    pub fn build_state(&self, cols: u16, rows: u16) -> GameState {
        GameState::new(self.game_config(cols, rows), self.seed()).with_relaxed(self.relaxed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
