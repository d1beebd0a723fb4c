//! Pieces module - tetromino shape tables.
//!
//! Each shape is four cell offsets from the piece origin inside a 4x4 box.
//! Rotation is a plain table lookup; there is no wall-kick search - a
//! rotation whose target cells are occupied or out of bounds is rejected
//! outright.

use crate::types::{PieceKind, Rotation, CELL_BLOCK, CELL_EMPTY, PREVIEW_SIZE};

/// Offset of a single cell relative to the piece origin.
pub type CellOffset = (i8, i8);

/// Shape of a piece - four cell offsets.
pub type PieceShape = [CellOffset; 4];

/// Spawn origin for new pieces (x, y).
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Shape (cell offsets) for a piece kind at a rotation state.
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    use Rotation::{East, North, South, West};
    match (kind, rotation) {
        (PieceKind::I, North) => [(0, 1), (1, 1), (2, 1), (3, 1)],
        (PieceKind::I, East) => [(2, 0), (2, 1), (2, 2), (2, 3)],
        (PieceKind::I, South) => [(0, 2), (1, 2), (2, 2), (3, 2)],
        (PieceKind::I, West) => [(1, 0), (1, 1), (1, 2), (1, 3)],

        // O is rotation-invariant.
        (PieceKind::O, _) => [(1, 0), (2, 0), (1, 1), (2, 1)],

        (PieceKind::T, North) => [(1, 0), (0, 1), (1, 1), (2, 1)],
        (PieceKind::T, East) => [(1, 0), (1, 1), (2, 1), (1, 2)],
        (PieceKind::T, South) => [(0, 1), (1, 1), (2, 1), (1, 2)],
        (PieceKind::T, West) => [(1, 0), (0, 1), (1, 1), (1, 2)],

        (PieceKind::S, North) => [(1, 0), (2, 0), (0, 1), (1, 1)],
        (PieceKind::S, East) => [(1, 0), (1, 1), (2, 1), (2, 2)],
        (PieceKind::S, South) => [(1, 1), (2, 1), (0, 2), (1, 2)],
        (PieceKind::S, West) => [(0, 0), (0, 1), (1, 1), (1, 2)],

        (PieceKind::Z, North) => [(0, 0), (1, 0), (1, 1), (2, 1)],
        (PieceKind::Z, East) => [(2, 0), (1, 1), (2, 1), (1, 2)],
        (PieceKind::Z, South) => [(0, 1), (1, 1), (1, 2), (2, 2)],
        (PieceKind::Z, West) => [(1, 0), (0, 1), (1, 1), (0, 2)],

        (PieceKind::J, North) => [(0, 0), (0, 1), (1, 1), (2, 1)],
        (PieceKind::J, East) => [(1, 0), (2, 0), (1, 1), (1, 2)],
        (PieceKind::J, South) => [(0, 1), (1, 1), (2, 1), (2, 2)],
        (PieceKind::J, West) => [(1, 0), (1, 1), (0, 2), (1, 2)],

        (PieceKind::L, North) => [(2, 0), (0, 1), (1, 1), (2, 1)],
        (PieceKind::L, East) => [(1, 0), (1, 1), (1, 2), (2, 2)],
        (PieceKind::L, South) => [(0, 1), (1, 1), (2, 1), (0, 2)],
        (PieceKind::L, West) => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// 4x4 preview mask of a piece at spawn orientation, as snapshot cell codes.
pub fn preview_mask(kind: PieceKind) -> [[u8; PREVIEW_SIZE]; PREVIEW_SIZE] {
    let mut mask = [[CELL_EMPTY; PREVIEW_SIZE]; PREVIEW_SIZE];
    for (dx, dy) in shape(kind, Rotation::North) {
        mask[dy as usize][dx as usize] = CELL_BLOCK;
    }
    mask
}
