//! Sound notifications.
//!
//! Notifications are fire-and-forget: nothing the game does waits on a sound.
//! Every sound is gated by an [`AudioSession`], which the game loop stops once
//! the session ends. After that only the game-over sound plays out in full.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

use log::debug;

use crate::types::GameEvent;

pub trait Notifier {
    fn notify(&self, event: GameEvent);

    /// Stop any sound still playing. Called once at the end of a session.
    fn stop(&self) {}
}

/// Sound disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _event: GameEvent) {}
}

#[derive(Debug, Default)]
struct SessionInner {
    stopped: AtomicBool,
    done: Mutex<bool>,
    cv: Condvar,
}

/// Shared on/off switch for sound. Clones refer to the same session.
#[derive(Debug, Clone, Default)]
pub struct AudioSession {
    inner: Arc<SessionInner>,
}

impl AudioSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.inner.stopped.load(Ordering::Acquire)
    }

    /// Stop the session. Only the first call signals waiters; later calls are
    /// no-ops. Safe from any thread.
    pub fn stop(&self) {
        if self.inner.stopped.swap(true, Ordering::AcqRel) {
            return;
        }
        let mut done = self
            .inner
            .done
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *done = true;
        self.inner.cv.notify_all();
        debug!("audio session stopped");
    }

    /// Block until [`AudioSession::stop`] has been called, up to `timeout`.
    /// Returns whether the session is stopped.
    pub fn wait_stopped(&self, timeout: Duration) -> bool {
        let done = self
            .inner
            .done
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let (done, _) = self
            .inner
            .cv
            .wait_timeout_while(done, timeout, |done| !*done)
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *done
    }
}

/// Gap between beeps of one notification.
const BEEP_GAP: Duration = Duration::from_millis(120);

/// Number of terminal bells rung per event.
pub fn beep_count(event: GameEvent) -> u32 {
    match event {
        GameEvent::FoodEaten => 1,
        GameEvent::PowerUpCollected(_) => 2,
        GameEvent::GameOver(_) => 3,
    }
}

/// Whether beep number `beep` of `event` still rings with the session in the
/// given state. The first beep always rings, and so does a whole game-over.
pub fn rings(event: GameEvent, beep: u32, active: bool) -> bool {
    beep == 0 || active || matches!(event, GameEvent::GameOver(_))
}

/// Rings the terminal bell on a detached thread.
#[derive(Debug, Clone, Default)]
pub struct BellNotifier {
    session: AudioSession,
}

impl BellNotifier {
    pub fn new(session: AudioSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &AudioSession {
        &self.session
    }
}

impl Notifier for BellNotifier {
    fn notify(&self, event: GameEvent) {
        if !self.session.is_active() {
            return;
        }
        let session = self.session.clone();
        let beeps = beep_count(event);
        // Detached: nothing joins a beep.
        let spawned = thread::Builder::new()
            .name("bell".to_string())
            .spawn(move || {
                for i in 0..beeps {
                    if !rings(event, i, session.is_active()) {
                        break;
                    }
                    let mut out = io::stdout();
                    if out.write_all(b"\x07").and_then(|_| out.flush()).is_err() {
                        break;
                    }
                    thread::sleep(BEEP_GAP);
                }
            });
        if let Err(err) = spawned {
            debug!("could not start bell thread: {err}");
        }
    }

    fn stop(&self) {
        self.session.stop();
    }
}

/// Keeps every event it is given until stopped. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<GameEvent>>>,
    stopped: Arc<AtomicBool>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events
            .lock()
            .map(|e| e.to_vec())
            .unwrap_or_else(|poisoned| poisoned.into_inner().to_vec())
    }

    pub fn stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: GameEvent) {
        if self.stopped() {
            return;
        }
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Collision, EndReason, PowerUpKind};

    #[test]
    fn stop_is_signalled_once_across_threads() {
        let session = AudioSession::new();
        assert!(session.is_active());
        assert!(!session.wait_stopped(Duration::from_millis(10)));

        let other = session.clone();
        let handle = thread::spawn(move || other.wait_stopped(Duration::from_secs(5)));
        thread::sleep(Duration::from_millis(20));
        session.stop();
        session.stop();

        assert!(handle.join().unwrap());
        assert!(!session.is_active());
        assert!(session.wait_stopped(Duration::ZERO));
    }

    #[test]
    fn beeps_scale_with_importance() {
        assert_eq!(beep_count(GameEvent::FoodEaten), 1);
        assert_eq!(
            beep_count(GameEvent::PowerUpCollected(PowerUpKind::SlowDown)),
            2
        );
        assert_eq!(
            beep_count(GameEvent::GameOver(EndReason::Collision(Collision::Body))),
            3
        );
        assert_eq!(beep_count(GameEvent::GameOver(EndReason::Quit)), 3);
    }

    #[test]
    fn stopping_cuts_short_all_but_game_over() {
        let food = GameEvent::FoodEaten;
        let over = GameEvent::GameOver(EndReason::Quit);
        assert!(rings(food, 0, false));
        assert!(!rings(food, 1, false));
        assert!(rings(food, 1, true));
        assert!((0..beep_count(over)).all(|i| rings(over, i, false)));
    }

    #[test]
    fn stopped_bell_stays_quiet() {
        let bell = BellNotifier::new(AudioSession::new());
        bell.stop();
        assert!(!bell.session().is_active());
        // No thread is spawned once stopped.
        bell.notify(GameEvent::FoodEaten);
    }
}
