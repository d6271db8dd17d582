//! Power-up spawning and timed effects
//!
//! Every pickup records its own entry with its own expiry. Entries of the same
//! kind stack: two overlapping SpeedUps halve the interval twice and each doubles
//! it back when it runs out.

use std::time::{Duration, Instant};

use log::debug;

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::{
    Cell, GameMode, Position, PowerUpKind, EXTRA_LENGTH_BONUS, POWERUP_DURATION_MS,
    POWERUP_SPAWN_CHANCE,
};

/// One activated effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub expires_at: Instant,
}

impl PowerUp {
    /// Time left before expiry (zero once past it).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}

/// Active power-ups plus the flags they drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerUpRegistry {
    active: Vec<PowerUp>,
    ghost: bool,
    multiplier: u32,
}

impl Default for PowerUpRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerUpRegistry {
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            ghost: false,
            multiplier: 1,
        }
    }

    /// Active entries in pickup order.
    pub fn active(&self) -> &[PowerUp] {
        &self.active
    }

    pub fn ghost(&self) -> bool {
        self.ghost
    }

    /// Points awarded per food.
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Apply `kind` and record an entry expiring [`POWERUP_DURATION_MS`] after `now`.
    pub fn activate(
        &mut self,
        kind: PowerUpKind,
        now: Instant,
        speed: &mut Duration,
        length: &mut u32,
    ) {
        match kind {
            PowerUpKind::SpeedUp => *speed /= 2,
            PowerUpKind::SlowDown => *speed *= 2,
            PowerUpKind::GhostMode => self.ghost = true,
            PowerUpKind::ExtraLength => *length += EXTRA_LENGTH_BONUS,
            PowerUpKind::DoublePoints => self.multiplier = 2,
        }

        self.active.push(PowerUp {
            kind,
            expires_at: now + Duration::from_millis(POWERUP_DURATION_MS),
        });
        debug!("power-up {:?} activated, speed now {:?}", kind, speed);
    }

    /// Reverse and drop every entry whose expiry lies strictly before `now`.
    ///
    /// Returns how many entries expired.
    pub fn expire_due(&mut self, now: Instant, speed: &mut Duration, length: &mut u32) -> usize {
        let before = self.active.len();
        let mut i = 0;
        while i < self.active.len() {
            let entry = self.active[i];
            if now <= entry.expires_at {
                i += 1;
                continue;
            }

            match entry.kind {
                PowerUpKind::SpeedUp => *speed *= 2,
                PowerUpKind::SlowDown => *speed /= 2,
                PowerUpKind::GhostMode => self.ghost = false,
                PowerUpKind::ExtraLength => *length = length.saturating_sub(EXTRA_LENGTH_BONUS),
                PowerUpKind::DoublePoints => self.multiplier = 1,
            }
            self.active.remove(i);
            debug!("power-up {:?} expired, speed now {:?}", entry.kind, speed);
        }
        before - self.active.len()
    }
}

/// In PowerUps mode, roll for a spawn and place a random kind on a random empty
/// cell other than `exclude`.
pub fn maybe_spawn(
    mode: GameMode,
    board: &mut Board,
    rng: &mut SimpleRng,
    exclude: Option<Position>,
) -> Option<(Position, PowerUpKind)> {
    if mode != GameMode::PowerUps || !rng.chance(POWERUP_SPAWN_CHANCE) {
        return None;
    }

    let kind = PowerUpKind::ALL[rng.next_range(PowerUpKind::ALL.len() as u32) as usize];
    let pos = board.random_empty_except(rng, exclude)?;
    board.set(pos, Cell::PowerUp(kind));
    Some((pos, kind))
}
