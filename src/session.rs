//! Wall-clock session driver
//!
//! `Session` sits between a host loop and the simulation. The host feeds it
//! pointer events and a steady stream of tick callbacks, each stamped with a
//! millisecond clock, and the session handles everything stateful about a
//! play-through that is not physics: the idle freeze before the first shot,
//! the weapon reload gate, the elapsed-time readout, and the click-to-restart
//! cycle after a game over.
//!
//! Timestamps are milliseconds on whatever monotonic-ish clock the host has.
//! Only differences matter, so `Instant`-derived values and epoch values both
//! work. Pointer coordinates are in simulation space; hosts convert from
//! display pixels with [`Viewport::to_sim`].

use glam::Vec2;

use crate::consts::RELOAD_MS;
use crate::sim::{Frame, GamePhase, GameState, TickInput, Viewport, tick};

/// One play-through of the game, restartable in place.
pub struct Session {
    state: GameState,
    /// Clock reading when this play-through began (creation or last reset).
    started_at_ms: f64,
    /// Set once, on the tick that flips the phase to game over.
    ended_at_ms: Option<f64>,
    /// Previous tick timestamp. `None` until the first tick after a reset,
    /// which therefore always runs with a zero delta.
    last_tick_at_ms: Option<f64>,
    /// Clicks before this deadline are swallowed by the reload gate.
    reload_until_ms: f64,
    /// Shot waiting for the next tick to materialize it.
    pending: TickInput,
}

impl Session {
    pub fn new(viewport: Viewport, seed: u64, now_ms: f64) -> Self {
        log::info!("session started with seed {}", seed);
        Self {
            state: GameState::new(viewport, seed),
            started_at_ms: now_ms,
            ended_at_ms: None,
            last_tick_at_ms: None,
            reload_until_ms: 0.0,
            pending: TickInput::default(),
        }
    }

    /// Handle a pointer press at `at` (simulation coordinates).
    ///
    /// While the weapon is reloading the click is dropped outright; the gate
    /// also debounces the restart click after a game over. A click that lands
    /// on the game-over screen resets the session instead of firing.
    pub fn pointer_down(&mut self, at: Vec2, now_ms: f64) {
        if now_ms < self.reload_until_ms {
            return;
        }
        if self.state.phase == GamePhase::GameOver {
            self.reset(now_ms);
            return;
        }

        if self.state.phase == GamePhase::Idle {
            self.state.phase = GamePhase::Playing;
            log::info!("first shot queued, clock running");
        }
        self.pending.shoot = Some(at);
        self.reload_until_ms = now_ms + RELOAD_MS;
    }

    /// Run one simulation tick against the wall clock.
    ///
    /// The delta is the time since the previous call, except before the first
    /// shot (and on the first call after a reset) where it is zero, so the
    /// opening rock field hangs in place until play begins.
    pub fn on_tick(&mut self, now_ms: f64) {
        let dt = match self.last_tick_at_ms {
            Some(last) if self.state.phase != GamePhase::Idle => (now_ms - last) as f32,
            _ => 0.0,
        };
        self.last_tick_at_ms = Some(now_ms);

        let input = TickInput {
            shoot: self.pending.shoot.take(),
        };
        tick(&mut self.state, &input, dt);

        if self.state.phase == GamePhase::GameOver && self.ended_at_ms.is_none() {
            self.ended_at_ms = Some(now_ms);
            log::info!("session over after {}", self.elapsed_label(now_ms));
        }
    }

    /// Start a fresh play-through with a derived seed, keeping the viewport.
    fn reset(&mut self, now_ms: f64) {
        let seed = self.state.seed.wrapping_mul(2654435761).wrapping_add(7919);
        self.state = GameState::new(self.state.viewport, seed);
        self.started_at_ms = now_ms;
        self.ended_at_ms = None;
        self.last_tick_at_ms = None;
        self.reload_until_ms = 0.0;
        self.pending = TickInput::default();
        log::info!("session reset with seed {}", seed);
    }

    /// Elapsed play time as `MM:SS`. Counts from session start, freezes at
    /// game over, and lets the minutes run past 59 rather than wrap.
    pub fn elapsed_label(&self, now_ms: f64) -> String {
        let end = self.ended_at_ms.unwrap_or(now_ms);
        let secs = ((end - self.started_at_ms) / 1000.0).floor() as u64;
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Snapshot the current state for rendering.
    pub fn frame(&self, now_ms: f64) -> Frame {
        Frame::capture(&self.state, self.elapsed_label(now_ms))
    }

    /// True while the weapon is cycling and clicks are being dropped.
    /// Hosts use this for cursor feedback.
    pub fn is_reloading(&self, now_ms: f64) -> bool {
        now_ms < self.reload_until_ms
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
