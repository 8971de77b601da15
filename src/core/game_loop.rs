//! Fixed-timestep driver for the progression engine.
//!
//! The host calls [`GameClock::advance`] with however much wall-clock time
//! passed since its last frame. The clock turns that into a whole number of
//! fixed-length ticks and tells the host when an autosave is due.

use super::constants::{AUTOSAVE_INTERVAL_MS, MAX_FRAME_DELTA_MS, TICK_INTERVAL_MS};
use super::engine::{ProgressionEngine, TickResult};

/// What the host should do after one `advance` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStep {
    /// Ticks of `tick_ms` each to run
    pub ticks: u32,
    /// An autosave interval elapsed during this step
    pub autosave_due: bool,
}

#[derive(Debug, Clone)]
pub struct GameClock {
    tick_ms: u64,
    autosave_ms: u64,
    /// Milliseconds not yet consumed as ticks
    accumulator: u64,
    since_autosave: u64,
    pub total_ticks: u64,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_MS, AUTOSAVE_INTERVAL_MS)
    }
}

impl GameClock {
    pub fn new(tick_ms: u64, autosave_ms: u64) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            autosave_ms,
            accumulator: 0,
            since_autosave: 0,
            total_ticks: 0,
        }
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    /// Feeds `delta_ms` of wall-clock time. Deltas above
    /// [`MAX_FRAME_DELTA_MS`] are clamped; long gaps are covered by offline
    /// progress instead.
    pub fn advance(&mut self, delta_ms: u64) -> LoopStep {
        let delta = delta_ms.min(MAX_FRAME_DELTA_MS);
        self.accumulator += delta;
        let ticks = self.accumulator / self.tick_ms;
        self.accumulator -= ticks * self.tick_ms;
        self.total_ticks += ticks;

        self.since_autosave += delta;
        let autosave_due = self.autosave_ms > 0 && self.since_autosave >= self.autosave_ms;
        if autosave_due {
            self.since_autosave %= self.autosave_ms;
        }

        LoopStep {
            ticks: ticks as u32,
            autosave_due,
        }
    }

    /// Advances the clock and runs the resulting ticks on `engine`.
    pub fn drive(&mut self, engine: &mut ProgressionEngine, delta_ms: u64) -> (LoopStep, Vec<TickResult>) {
        let step = self.advance(delta_ms);
        let results = (0..step.ticks).map(|_| engine.tick(self.tick_ms)).collect();
        (step, results)
    }
}
