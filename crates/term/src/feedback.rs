//! Visual feedback driven by engine events.
//!
//! `Feedback` keeps the transient presentation state that the engine does not
//! own: the line-clear banner, the status message and the board shake. It is
//! fed with drained [`GameEvent`]s and aged once per frame with
//! [`Feedback::update`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{GameEvent, MEGA_CLEAR_LINES};

/// How long the line-clear banner stays up.
pub const COMBO_MS: u32 = 900;
/// How long the board stays displaced after an impact.
pub const SHAKE_MS: u32 = 120;

pub const PAUSED_MESSAGE: &str = "PAUSED";
pub const GAME_OVER_MESSAGE: &str = "GAME OVER - press R to restart";
pub const MEGA_CLEAR_TEXT: &str = "MEGA CLEAR!";

/// Impact power per column of horizontal displacement.
const POWER_PER_COL: u8 = 6;
/// Impact power per row of vertical displacement (rows are about twice as tall).
const POWER_PER_ROW: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shake {
    dx: i16,
    dy: i16,
    remaining_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Feedback {
    combo: String,
    combo_remaining_ms: u32,
    message: Option<&'static str>,
    shake: Option<Shake>,
    rng: StdRng,
}

impl Feedback {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic shake offsets.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            combo: String::new(),
            combo_remaining_ms: 0,
            message: None,
            shake: None,
            rng,
        }
    }

    pub fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::LinesCleared(lines) => self.show_combo(lines),
            GameEvent::Impact { power } => self.shake(power),
            GameEvent::GameOver => self.message = Some(GAME_OVER_MESSAGE),
            GameEvent::Paused(true) => self.message = Some(PAUSED_MESSAGE),
            GameEvent::Paused(false) => self.message = None,
            GameEvent::Restarted => {
                self.message = None;
                self.combo.clear();
                self.combo_remaining_ms = 0;
                self.shake = None;
            }
            GameEvent::Moved
            | GameEvent::Rotated
            | GameEvent::SoftDropped
            | GameEvent::Dropped { .. } => {}
        }
    }

    pub fn extend<I: IntoIterator<Item = GameEvent>>(&mut self, events: I) {
        for event in events {
            self.on_event(event);
        }
    }

    /// Age timers by `elapsed_ms`.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.combo_remaining_ms = self.combo_remaining_ms.saturating_sub(elapsed_ms);
        if self.combo_remaining_ms == 0 {
            self.combo.clear();
        }
        if let Some(shake) = &mut self.shake {
            shake.remaining_ms = shake.remaining_ms.saturating_sub(elapsed_ms);
            if shake.remaining_ms == 0 {
                self.shake = None;
            }
        }
    }

    /// Current line-clear banner, if one is showing.
    pub fn combo(&self) -> Option<&str> {
        (!self.combo.is_empty()).then_some(self.combo.as_str())
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// Board displacement in terminal cells; `(0, 0)` when settled.
    pub fn shake_offset(&self) -> (i16, i16) {
        self.shake.map_or((0, 0), |s| (s.dx, s.dy))
    }

    fn show_combo(&mut self, lines: u32) {
        if lines == 0 {
            return;
        }
        self.combo.clear();
        if lines >= MEGA_CLEAR_LINES {
            self.combo.push_str(MEGA_CLEAR_TEXT);
        } else {
            use std::fmt::Write;
            let _ = write!(self.combo, "{lines} LINE CLEAR!");
        }
        self.combo_remaining_ms = COMBO_MS;
    }

    fn shake(&mut self, power: u8) {
        let reach_x = i16::from(power / POWER_PER_COL);
        let reach_y = i16::from(power / POWER_PER_ROW);
        self.shake = Some(Shake {
            dx: self.rng.random_range(-reach_x..=reach_x),
            dy: self.rng.random_range(-reach_y..=reach_y),
            remaining_ms: SHAKE_MS,
        });
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new()
    }
}
