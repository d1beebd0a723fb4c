//! Plugin boundary - the game-agnostic interface a frontend drives.
//!
//! A frontend holds a `Box<dyn GamePlugin>` and never learns which game is
//! behind it: it submits inputs, advances the clock, and renders snapshots.
//! Games register in the compile-time `GameKind` table rather than being
//! loaded dynamically, so adding a game is adding an enum variant.

use crate::core::fsm::{GameCore, GameFsm};
use crate::core::snake::SnakeEngine;
use crate::core::snapshot::GameSnapshot;
use crate::core::tetris::TetrisEngine;
use crate::types::{GameStatus, UserAction};

/// Uniform interface every game exposes to frontends.
pub trait GamePlugin {
    /// Feed one user action. `hold` distinguishes a held button from a tap.
    fn submit_input(&mut self, action: UserAction, hold: bool);

    /// Advance the simulation by one tick. Frontends call this on the
    /// cadence reported by `query_snapshot().speed_ms`.
    fn advance(&mut self);

    /// Read-only view of the current state. Calling this repeatedly without
    /// `advance` in between yields identical snapshots.
    fn query_snapshot(&self) -> GameSnapshot;

    /// Whether the game has reached a terminal state.
    fn is_terminated(&self) -> bool;

    /// Whether the terminal state is a victory.
    fn is_victory(&self) -> bool;
}

impl<C: GameCore> GamePlugin for GameFsm<C> {
    fn submit_input(&mut self, action: UserAction, hold: bool) {
        self.handle_input(action, hold);
    }

    fn advance(&mut self) {
        GameFsm::advance(self);
    }

    fn query_snapshot(&self) -> GameSnapshot {
        self.snapshot()
    }

    fn is_terminated(&self) -> bool {
        self.status().is_terminal()
    }

    fn is_victory(&self) -> bool {
        self.status() == GameStatus::Won
    }
}

/// The built-in game registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Tetris,
    Snake,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::Tetris, GameKind::Snake];

    /// Parse a game name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tetris" => Some(GameKind::Tetris),
            "snake" => Some(GameKind::Snake),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Tetris => "tetris",
            GameKind::Snake => "snake",
        }
    }

    /// Whether the game reads the Action button's `hold` flag (Snake's
    /// acceleration). Frontends that synthesize hold releases must not
    /// send them to games where Action is a plain tap.
    pub fn consumes_hold(&self) -> bool {
        matches!(self, GameKind::Snake)
    }

    /// Instantiate the game behind the boundary.
    pub fn create(&self, seed: u32) -> Box<dyn GamePlugin> {
        match self {
            GameKind::Tetris => Box::new(GameFsm::new(TetrisEngine::new(seed))),
            GameKind::Snake => Box::new(GameFsm::new(SnakeEngine::new(seed))),
        }
    }
}
