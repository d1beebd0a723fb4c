//! Game FSM module - the lifecycle machine shared by both games.
//!
//! `GameCore` is the seam between the machine and a simulation engine. The
//! engine owns the authoritative status value (it alone can enter Lost/Won
//! from inside a tick); the machine drives lifecycle transitions from user
//! actions and forwards gameplay actions while running.
//!
//! Invalid transition attempts (Start while Running, Pause while Ready, ...)
//! are silently ignored.

use crate::core::snapshot::GameSnapshot;
use crate::types::{GameStatus, UserAction};

/// Operations a simulation engine exposes to the lifecycle machine.
pub trait GameCore {
    /// Return to the Ready state: clear the grid, reset score/level/speed,
    /// regenerate initial entities.
    fn reset(&mut self);

    /// Spawn/place initial entities and enter Running.
    fn begin(&mut self);

    /// One simulation step. Must be a no-op unless Running.
    fn tick(&mut self);

    /// Gameplay action (directional input or the Action button) while
    /// Running. Invalid moves are rejected silently.
    fn handle_action(&mut self, action: UserAction, hold: bool);

    /// Freeze tick processing.
    fn pause(&mut self);

    /// Resume from Paused.
    fn resume(&mut self);

    /// Mark the game terminal (player quit).
    fn terminate(&mut self);

    /// Authoritative lifecycle status.
    fn status(&self) -> GameStatus;

    /// Materialize a fresh deep-copy snapshot.
    fn write_snapshot(&self, out: &mut GameSnapshot);
}

/// Lifecycle machine wrapping one engine instance.
///
/// There is no implicit global state: each frontend constructs and owns its
/// machine, so multiple instances can coexist (and tests stay independent).
#[derive(Debug)]
pub struct GameFsm<C> {
    core: C,
}

impl<C: GameCore> GameFsm<C> {
    pub fn new(core: C) -> Self {
        Self { core }
    }

    /// Apply one user action according to the transition table.
    pub fn handle_input(&mut self, action: UserAction, hold: bool) {
        match action {
            UserAction::Start => match self.core.status() {
                GameStatus::Ready | GameStatus::Lost | GameStatus::Won => {
                    self.core.reset();
                    self.core.begin();
                }
                _ => {}
            },
            UserAction::Pause => match self.core.status() {
                GameStatus::Running => self.core.pause(),
                GameStatus::Paused => self.core.resume(),
                _ => {}
            },
            UserAction::Terminate => match self.core.status() {
                GameStatus::Running | GameStatus::Paused => self.core.terminate(),
                _ => {}
            },
            UserAction::Up
            | UserAction::Down
            | UserAction::Left
            | UserAction::Right
            | UserAction::Action => {
                if self.core.status() == GameStatus::Running {
                    self.core.handle_action(action, hold);
                }
            }
        }
    }

    /// Advance the simulation by one tick. The engine no-ops unless Running,
    /// and may flip itself to Lost/Won inside the tick; the machine simply
    /// observes the engine's status afterwards.
    pub fn advance(&mut self) {
        self.core.tick();
    }

    pub fn status(&self) -> GameStatus {
        self.core.status()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.core.write_snapshot(&mut snap);
        snap
    }

    pub fn core(&self) -> &C {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut C {
        &mut self.core
    }
}
