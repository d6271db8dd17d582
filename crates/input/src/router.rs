//! Input router: a dedicated thread that turns key presses into queued events.
//!
//! The router never touches game state. It only pushes [`InputEvent`]s into a
//! bounded channel; the game loop on the other end validates and applies them.
//! A full channel blocks the reader, which is fine because keys arrive far slower
//! than the loop drains them.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use log::{debug, warn};

use crate::map::to_input_event;
use crate::types::InputEvent;

/// How long one read waits before re-checking the stop flag.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Pause after a failed read before retrying.
const GLITCH_BACKOFF: Duration = Duration::from_millis(10);

/// A blocking source of key events.
pub trait KeySource: Send + 'static {
    /// Wait up to `timeout` for the next key event.
    ///
    /// `Ok(None)` means nothing arrived (or a non-key event did).
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>>;
}

/// Keys read from the controlling terminal through crossterm.
///
/// Expects raw mode to be enabled by the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// Handle to the running reader thread.
pub struct InputRouter {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputRouter {
    /// Start reading from `source` on a new thread.
    ///
    /// Returns the router handle and the consuming end of a channel holding at
    /// most `capacity` pending events.
    pub fn spawn<S: KeySource>(
        mut source: S,
        capacity: usize,
    ) -> io::Result<(Self, Receiver<InputEvent>)> {
        let (tx, rx) = mpsc::sync_channel::<InputEvent>(capacity.max(1));
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("input-router".to_string())
            .spawn(move || {
                while !thread_stop.load(Ordering::Acquire) {
                    match source.next_key(POLL_INTERVAL) {
                        Ok(Some(key)) => {
                            let Some(ev) = to_input_event(key) else {
                                continue;
                            };
                            if tx.send(ev).is_err() {
                                // Game loop is gone.
                                break;
                            }
                        }
                        Ok(None) => {}
                        Err(err) => {
                            if thread_stop.load(Ordering::Acquire) {
                                break;
                            }
                            debug!("input read failed, retrying: {err}");
                            thread::sleep(GLITCH_BACKOFF);
                        }
                    }
                }
                debug!("input router stopped");
            })?;

        Ok((
            Self {
                stop,
                handle: Some(handle),
            },
            rx,
        ))
    }

    /// Ask the reader to stop after its current read.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Stop and wait for the thread.
    ///
    /// Drop the receiver first: a reader blocked on a full channel only wakes
    /// when the receiver goes away.
    pub fn shutdown(mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("input router thread panicked");
            }
        }
    }
}

impl Drop for InputRouter {
    fn drop(&mut self) {
        self.stop();
    }
}
