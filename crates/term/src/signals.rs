//! Terminal restore on termination signals.
//!
//! Raw mode turns Ctrl-C into a key, but a `kill` or a closed terminal still
//! delivers SIGTERM, SIGHUP or SIGINT. Those would end the process with the
//! terminal left raw, so a watcher thread restores it and exits first.

use std::io;
use std::os::raw::c_int;
use std::thread::{self, JoinHandle};

use log::{info, warn};
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::{Handle, Signals};

use crate::renderer::restore_terminal;

/// Signals that end the game.
pub const TERMINATING_SIGNALS: [c_int; 3] = [SIGINT, SIGTERM, SIGHUP];

/// Shell convention for a process killed by `sig`.
pub fn exit_code(sig: c_int) -> i32 {
    128 + sig
}

/// Watches for signals until dropped.
pub struct SignalRestore {
    handle: Handle,
    thread: Option<JoinHandle<()>>,
}

impl SignalRestore {
    /// Restore the terminal and exit on any of [`TERMINATING_SIGNALS`].
    pub fn install() -> io::Result<Self> {
        Self::watch(&TERMINATING_SIGNALS, |sig| {
            restore_terminal();
            info!("caught signal {sig}, exiting");
            std::process::exit(exit_code(sig));
        })
    }

    /// Run `action` on a dedicated thread for the first of `signals` to arrive.
    pub fn watch<F>(signals: &[c_int], action: F) -> io::Result<Self>
    where
        F: FnOnce(c_int) + Send + 'static,
    {
        let mut signals = Signals::new(signals)?;
        let handle = signals.handle();
        let thread = thread::Builder::new()
            .name("signal-restore".to_string())
            .spawn(move || {
                // Yields nothing once the handle is closed.
                if let Some(sig) = signals.forever().next() {
                    action(sig);
                }
            })?;
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for SignalRestore {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("signal watcher panicked");
            }
        }
    }
}
