//! Game controller
//!
//! Owns the state, the held keys and the notifier, and drives exactly one
//! tick plus one draw per display refresh while running.
//!
//! ```text
//! Idle --start--> Running --pause--> Idle --start--> Running ...
//! ```
//!
//! `start` always resets score, player and ball, so starting again after a
//! pause is a restart.

use crate::notify::{Notification, Notifier};
use crate::renderer::{Surface, draw_frame};
use crate::sim::{GameEvent, GamePhase, GameState, HeldKeys, MoveKey, tick};
use crate::tuning::Tuning;

pub struct GameController<N: Notifier> {
    tuning: Tuning,
    state: GameState,
    keys: HeldKeys,
    notifier: N,
    frames_drawn: u64,
}

impl<N: Notifier> GameController<N> {
    /// Idle controller with everything on its spawn point.
    /// Out-of-range tuning values fall back to their defaults.
    pub fn new(tuning: Tuning, notifier: N) -> Self {
        let tuning = tuning.sanitized();
        let state = GameState::new(&tuning.field);
        Self {
            tuning,
            state,
            keys: HeldKeys::new(),
            notifier,
            frames_drawn: 0,
        }
    }

    /// Reset the pitch and start running
    pub fn start(&mut self) {
        let was = self.state.phase;
        self.state.reset(&self.tuning.field);
        self.state.phase = GamePhase::Running;
        self.notifier.notify(Notification::game_started());
        log::info!("Game started (was {:?})", was);
    }

    /// Stop stepping. Returns false if the game was not running.
    pub fn pause(&mut self) -> bool {
        if self.state.phase != GamePhase::Running {
            return false;
        }
        self.state.phase = GamePhase::Idle;
        log::info!(
            "Game paused at tick {} with score {}",
            self.state.time_ticks,
            self.state.score
        );
        true
    }

    /// Start when idle, pause when running
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Handle a key-down by its DOM key name.
    ///
    /// Returns true for movement keys; the caller should then suppress the
    /// browser's default action (page scrolling).
    pub fn key_down(&mut self, key: &str) -> bool {
        match MoveKey::from_key(key) {
            Some(k) => {
                self.press(k);
                true
            }
            None => false,
        }
    }

    /// Handle a key-up by its DOM key name
    pub fn key_up(&mut self, key: &str) {
        if let Some(k) = MoveKey::from_key(key) {
            self.release(k);
        }
    }

    pub fn press(&mut self, key: MoveKey) {
        if self.keys.press(key) {
            log::trace!("key down {:?}", key);
        }
    }

    pub fn release(&mut self, key: MoveKey) {
        if self.keys.release(key) {
            log::trace!("key up {:?}", key);
        }
    }

    /// One display refresh: step, forward events, draw.
    ///
    /// Does nothing while idle. A missing surface skips the draw.
    /// Returns whether another frame should be scheduled.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: Option<&mut S>) -> bool {
        if !tick(&mut self.state, &self.keys, &self.tuning) {
            return false;
        }
        self.dispatch_events();
        self.redraw(surface);
        self.is_running()
    }

    /// Draw the current state without stepping
    pub fn redraw<S: Surface + ?Sized>(&mut self, surface: Option<&mut S>) {
        match surface {
            Some(surface) => {
                draw_frame(surface, &self.state, &self.tuning);
                self.frames_drawn += 1;
            }
            None => log::trace!("no surface, skipping draw"),
        }
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::GoalScored { score } => {
                    log::info!("Goal! score {}", score);
                    self.notifier.notify(Notification::goal(score));
                }
                GameEvent::BallKicked { vel } => {
                    log::debug!("kick at tick {}: {:?}", self.state.time_ticks, vel);
                }
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Running
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn held_keys(&self) -> &HeldKeys {
        &self.keys
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Frames actually drawn (skipped draws are not counted)
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}
