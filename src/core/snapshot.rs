//! Snapshot module - the immutable render view handed across the plugin
//! boundary.
//!
//! A snapshot is an owned deep copy: the caller may keep, mutate, or drop it
//! freely, and later engine ticks never touch an already-issued snapshot.
//! Ownership replaces the manual field/next allocation and free-function
//! protocol of older BrickGame ports.

use crate::types::{GameStatus, CELL_EMPTY, FIELD_HEIGHT, FIELD_WIDTH, PREVIEW_SIZE};

/// Full render state for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Row-major field copy with the active entity already overlaid.
    pub field: [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
    /// Next-piece preview (Tetris); `None` for games without one.
    pub preview: Option<[[u8; PREVIEW_SIZE]; PREVIEW_SIZE]>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    /// Effective tick interval in milliseconds (acceleration applied).
    pub speed_ms: u32,
    pub paused: bool,
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Cell code at (x, y). Panics on out-of-range coordinates, which are a
    /// caller bug given the fixed field dimensions.
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        self.field[y][x]
    }

    /// Count of cells holding `code`.
    pub fn count_cells(&self, code: u8) -> usize {
        self.field.iter().flatten().filter(|&&c| c == code).count()
    }

}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[CELL_EMPTY; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            preview: None,
            score: 0,
            high_score: 0,
            level: 1,
            speed_ms: 0,
            paused: false,
            status: GameStatus::Ready,
        }
    }
}
