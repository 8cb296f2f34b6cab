//! Scoring module - line-clear points and the gravity speed ramp
//!
//! One fixed table, no level multiplier, no combos. Speed is driven purely
//! by score: every `SPEED_SCORE_STEP` points shave `SPEED_STEP_MS` off the
//! gravity interval until it reaches `MIN_DROP_MS`.

use crate::types::{
    BASE_DROP_MS, LINE_SCORES, MIN_DROP_MS, OVERFLOW_LINE_SCORE, SPEED_SCORE_STEP, SPEED_STEP_MS,
};

/// Points awarded for clearing `lines` rows with one lock.
///
/// Clears beyond the table fall back to `lines * OVERFLOW_LINE_SCORE`.
pub fn line_clear_points(lines: u32) -> u32 {
    match LINE_SCORES.get(lines as usize) {
        Some(&points) => points,
        None => lines.saturating_mul(OVERFLOW_LINE_SCORE),
    }
}

/// Number of speed steps earned at `score`.
pub fn speed_level(score: u32) -> u32 {
    score / SPEED_SCORE_STEP
}

/// Gravity interval after a lock at the given score.
///
/// Non-increasing in `score` and never below `MIN_DROP_MS`.
pub fn drop_interval_ms(score: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(speed_level(score).saturating_mul(SPEED_STEP_MS))
        .max(MIN_DROP_MS)
}
