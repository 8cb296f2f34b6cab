//! Scheduler module - turns frame timestamps into gravity ticks
//!
//! Call [`Scheduler::tick`] once per frame with the frame's timestamp. The
//! elapsed time is accumulated while the game is not paused; once it reaches
//! the engine's current drop interval one soft drop fires and the
//! accumulator is reset to zero (not reduced by the interval), so a slow
//! frame never produces a burst of catch-up ticks.

use tracing::trace;

use crate::engine::Engine;
use crate::rng::RandomSource;

/// What a single frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// The game is over; nothing is scheduled until a restart.
    Halted,
    /// Gravity is suspended.
    Paused,
    /// Not enough time has accumulated yet.
    Waiting,
    /// A gravity tick fired. `advanced` is false when it locked the piece.
    Gravity { advanced: bool },
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    last_ms: u64,
    accumulator_ms: u64,
    /// Session the timers belong to; a change means the engine restarted.
    episode_id: Option<u32>,
}

impl Scheduler {
    pub fn new(now_ms: u64) -> Self {
        Self {
            last_ms: now_ms,
            accumulator_ms: 0,
            episode_id: None,
        }
    }

    /// Forget accumulated time and measure from `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.last_ms = now_ms;
        self.accumulator_ms = 0;
    }

    pub fn accumulator_ms(&self) -> u64 {
        self.accumulator_ms
    }

    pub fn last_ms(&self) -> u64 {
        self.last_ms
    }

    /// Advance the clock to `now_ms` and fire gravity if it is due.
    pub fn tick<R: RandomSource>(&mut self, engine: &mut Engine<R>, now_ms: u64) -> TickOutcome {
        match self.episode_id {
            Some(id) if id != engine.episode_id() => {
                self.episode_id = Some(engine.episode_id());
                self.reset(now_ms);
            }
            None => self.episode_id = Some(engine.episode_id()),
            Some(_) => {}
        }

        if engine.game_over() {
            return TickOutcome::Halted;
        }

        let delta = now_ms.saturating_sub(self.last_ms);
        self.last_ms = now_ms;

        if engine.paused() {
            return TickOutcome::Paused;
        }

        self.accumulator_ms = self.accumulator_ms.saturating_add(delta);
        if self.accumulator_ms < u64::from(engine.drop_interval_ms()) {
            return TickOutcome::Waiting;
        }

        trace!(waited_ms = self.accumulator_ms, "gravity tick");
        let advanced = engine.soft_drop();
        self.accumulator_ms = 0;
        TickOutcome::Gravity { advanced }
    }
}
