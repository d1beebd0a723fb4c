//! Simulation cores: the shared playfield, the two game engines and the
//! lifecycle machine that drives them.

pub mod field;
pub mod fsm;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snake;
pub mod snapshot;
pub mod tetris;

pub use field::Field;
pub use fsm::{GameCore, GameFsm};
pub use rng::{PieceBag, SimpleRng};
pub use snake::SnakeEngine;
pub use snapshot::GameSnapshot;
pub use tetris::TetrisEngine;
