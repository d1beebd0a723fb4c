//! High-score persistence - one integer per game, stored as plain text in a
//! well-known file next to the working directory.
//!
//! Reads default to 0 when the file is missing or unreadable; writes fail
//! silently so a full disk never interrupts a game in progress.

use std::fs;
use std::path::PathBuf;

/// Handle to a single persisted high-score value.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store under the well-known per-game file name.
    pub fn new(file_name: &str) -> Self {
        Self {
            path: PathBuf::from(file_name),
        }
    }

    /// Store at an explicit path (used by tests).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted value, defaulting to 0 on any failure.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Persist a new value. Failures are ignored.
    pub fn save(&self, value: u32) {
        let _ = fs::write(&self.path, value.to_string());
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}
