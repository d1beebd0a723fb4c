//! Scoring module - score tables and level/speed curves for both games.

use crate::types::{
    BASE_SPEED_MS, LINE_SCORES, MAX_LEVEL, MIN_SPEED_MS, SNAKE_POINTS_PER_LEVEL, SPEED_STEP_MS,
    TETRIS_POINTS_PER_LEVEL,
};

/// Points for clearing `rows` rows in a single lock (1..=4).
pub fn line_clear_score(rows: usize) -> u32 {
    if rows == 0 || rows >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[rows]
}

/// Tetris level from the cumulative score: one step per 600 points,
/// clamped to the maximum.
pub fn tetris_level(score: u32) -> u32 {
    (1 + score / TETRIS_POINTS_PER_LEVEL).min(MAX_LEVEL)
}

/// Snake level from the cumulative score: one step per 5 apples,
/// clamped to the maximum.
pub fn snake_level(score: u32) -> u32 {
    (1 + score / SNAKE_POINTS_PER_LEVEL).min(MAX_LEVEL)
}

/// Tick interval in ms for a level: strictly decreasing step function with
/// a floor clamp.
pub fn speed_for_level(level: u32) -> u32 {
    let step = level.saturating_sub(1) * SPEED_STEP_MS;
    BASE_SPEED_MS.saturating_sub(step).max(MIN_SPEED_MS)
}
