//! RNG module - deterministic randomness for both games.
//!
//! A small LCG (Numerical Recipes constants) keeps every game reproducible
//! from its seed: the Tetris 7-bag draws and Snake's apple placement both
//! run off it. Each bag contains one of each tetromino, shuffled; draws
//! empty the bag before a new one is generated.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed (0 is remapped to avoid a
    /// degenerate all-zero sequence).
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (usable to restart with the same sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag tetromino generator.
#[derive(Debug, Clone)]
pub struct PieceBag {
    bag: [PieceKind; 7],
    index: usize,
    rng: SimpleRng,
}

impl PieceBag {
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.index = 0;
    }

    /// Draw the next piece, refilling and reshuffling when the bag empties.
    pub fn draw(&mut self) -> PieceKind {
        if self.index >= self.bag.len() {
            self.refill();
        }
        let piece = self.bag[self.index];
        self.index += 1;
        piece
    }

    /// Current RNG state.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
