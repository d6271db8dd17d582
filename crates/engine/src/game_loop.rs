//! The game loop: one thread of control merging input with the tick clock.
//!
//! While running, the loop waits on the input queue until the next tick is
//! due. An event that arrives first is applied and the frame redrawn; a timeout
//! advances the simulation one step. While paused only input is consumed, and
//! the tick deadline restarts from the moment play resumes.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Instant;

use anyhow::Result;
use log::{info, warn};

use crate::core::{EndReason, GameState, Phase};
use crate::notifier::Notifier;
use crate::scores::ScoreStore;
use crate::term::{FrameBuffer, FrameSink, GameView};
use crate::types::{GameAction, GameEvent, InputEvent};

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub reason: EndReason,
    pub score: u32,
    /// Simulation steps taken
    pub ticks: u64,
    /// Frames handed to the sink, the final one included
    pub frames: u64,
    /// Whether the score reached the store
    pub saved: bool,
}

pub struct GameLoop<S, N, T> {
    view: GameView,
    sink: S,
    notifier: N,
    scores: T,
    fb: FrameBuffer,
    wait_for_key: bool,
    ticks: u64,
    frames: u64,
}

impl<S, N, T> GameLoop<S, N, T>
where
    S: FrameSink,
    N: Notifier,
    T: ScoreStore,
{
    pub fn new(sink: S, notifier: N, scores: T) -> Self {
        Self {
            view: GameView::new(),
            sink,
            notifier,
            scores,
            fb: FrameBuffer::new(0, 0),
            wait_for_key: false,
            ticks: 0,
            frames: 0,
        }
    }

    /// Wait for one more key after the final frame.
    pub fn with_prompt(mut self, wait_for_key: bool) -> Self {
        self.wait_for_key = wait_for_key;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn scores(&self) -> &T {
        &self.scores
    }

    /// Play `state` to the end.
    ///
    /// A closed input queue counts as a quit. Only sink failures are errors;
    /// score persistence problems are logged.
    pub fn run(
        &mut self,
        state: &mut GameState,
        events: &Receiver<InputEvent>,
    ) -> Result<SessionOutcome> {
        if !state.started() {
            state.start();
        }
        self.ticks = 0;
        self.frames = 0;
        self.draw(state)?;

        let mut deadline = Instant::now() + state.speed();
        loop {
            match state.phase() {
                Phase::Ended(_) => break,
                Phase::Paused => match events.recv() {
                    Ok(event) => {
                        apply_event(state, event);
                        if !state.paused() {
                            deadline = Instant::now() + state.speed();
                        }
                        if !state.exit_game() {
                            self.draw(state)?;
                        }
                    }
                    Err(_) => {
                        state.apply_action(GameAction::Quit);
                    }
                },
                Phase::Running => {
                    let timeout = deadline.saturating_duration_since(Instant::now());
                    match events.recv_timeout(timeout) {
                        Ok(event) => {
                            apply_event(state, event);
                            if !state.exit_game() {
                                self.draw(state)?;
                            }
                        }
                        Err(RecvTimeoutError::Timeout) => {
                            let now = Instant::now();
                            let outcome = state.tick(now);
                            if outcome.advanced {
                                self.ticks += 1;
                            }
                            // Game over is announced once, in `finish`.
                            for event in outcome.events {
                                if !matches!(event, GameEvent::GameOver(_)) {
                                    self.notifier.notify(event);
                                }
                            }
                            deadline = now + state.speed();
                            if !state.exit_game() {
                                self.draw(state)?;
                            }
                        }
                        Err(RecvTimeoutError::Disconnected) => {
                            state.apply_action(GameAction::Quit);
                        }
                    }
                }
            }
        }

        self.finish(state, events)
    }

    fn finish(
        &mut self,
        state: &GameState,
        events: &Receiver<InputEvent>,
    ) -> Result<SessionOutcome> {
        let reason = match state.phase() {
            Phase::Ended(reason) => reason,
            Phase::Running | Phase::Paused => EndReason::Quit,
        };
        self.notifier.notify(GameEvent::GameOver(reason));
        self.notifier.stop();
        self.draw(state)?;

        let score = state.score();
        let saved = score > 0
            && match self.scores.append(score) {
                Ok(()) => true,
                Err(err) => {
                    warn!("{err}");
                    false
                }
            };
        info!(
            "session over: {:?}, score {}, {} ticks",
            reason, score, self.ticks
        );

        if self.wait_for_key {
            // Any key; a closed queue has nothing left to wait for.
            let _ = events.recv();
        }

        Ok(SessionOutcome {
            reason,
            score,
            ticks: self.ticks,
            frames: self.frames,
            saved,
        })
    }

    fn draw(&mut self, state: &GameState) -> Result<()> {
        self.view.render_into(state, Instant::now(), &mut self.fb);
        self.sink.present(&self.fb)?;
        self.frames += 1;
        Ok(())
    }
}

fn apply_event(state: &mut GameState, event: InputEvent) -> bool {
    match event {
        InputEvent::Action(action) => state.apply_action(action),
        InputEvent::Other => false,
    }
}
