//! BrickGame: Tetris and Snake simulation cores behind one plugin boundary.
//!
//! The library splits into the game-side (`core`, `highscore`) and the
//! frontend-side (`plugin`, `input`, `term`): frontends drive any game
//! through `plugin::GamePlugin` and render the `GameSnapshot` it returns,
//! without knowing which game is behind the boundary.

pub mod core;
pub mod highscore;
pub mod input;
pub mod plugin;
pub mod term;
pub mod types;
