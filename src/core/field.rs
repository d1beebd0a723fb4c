//! Playfield module - the shared 10x20 grid.
//!
//! Cells hold raw cell codes (`CELL_EMPTY` / `CELL_BLOCK` / `CELL_ITEM`) in a
//! flat array for cache locality and zero-allocation updates.
//! Coordinates: (x, y) with x in 0..10 (left to right), y in 0..20 (top to
//! bottom). The field is owned exclusively by a simulation engine and is
//! never resized.

use arrayvec::ArrayVec;

use crate::types::{CELL_BLOCK, CELL_EMPTY, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the field.
const FIELD_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// The playfield - 10 columns x 20 rows using flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    cells: [u8; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field.
    pub fn new() -> Self {
        Self {
            cells: [CELL_EMPTY; FIELD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (FIELD_WIDTH as usize) + (x as usize))
    }

    /// Whether (x, y) lies on the field.
    pub fn is_inside(x: i8, y: i8) -> bool {
        Self::index(x, y).is_some()
    }

    /// Cell code at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the cell code at (x, y). Returns false when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, code: u8) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = code;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(CELL_EMPTY))
    }

    /// Whether every column of row `y` is occupied by a locked block.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= FIELD_HEIGHT as usize {
            return false;
        }
        let start = y * FIELD_WIDTH as usize;
        let end = start + FIELD_WIDTH as usize;
        self.cells[start..end].iter().all(|&c| c == CELL_BLOCK)
    }

    /// Clear all full rows, shifting the rows above down and inserting blank
    /// rows at the top. Returns the cleared row indices, bottom to top.
    ///
    /// Two-pointer compaction over the flat buffer, no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let width = FIELD_WIDTH as usize;
        let mut write_y = FIELD_HEIGHT as usize;

        for read_y in (0..FIELD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        for y in 0..write_y {
            let start = y * width;
            self.cells[start..start + width].fill(CELL_EMPTY);
        }

        cleared.reverse();
        cleared
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(CELL_EMPTY);
    }

    /// Deep-copy the field into a row-major snapshot grid.
    pub fn write_grid(&self, out: &mut [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize]) {
        let width = FIELD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.cells[start..start + width]);
        }
    }

    /// Raw cell slice (row-major).
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CELL_ITEM;

    fn fill_row(field: &mut Field, y: i8) {
        for x in 0..FIELD_WIDTH as i8 {
            field.set(x, y, CELL_BLOCK);
        }
    }

    #[test]
    fn index_bounds() {
        assert!(Field::is_inside(0, 0));
        assert!(Field::is_inside(9, 19));
        assert!(!Field::is_inside(-1, 0));
        assert!(!Field::is_inside(10, 0));
        assert!(!Field::is_inside(0, 20));
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut field = Field::new();
        assert!(field.set(3, 7, CELL_BLOCK));
        assert!(field.set(5, 10, CELL_ITEM));
        assert_eq!(field.get(3, 7), Some(CELL_BLOCK));
        assert_eq!(field.get(5, 10), Some(CELL_ITEM));
        assert_eq!(field.get(0, 0), Some(CELL_EMPTY));
        assert!(!field.set(10, 0, CELL_BLOCK));
        assert_eq!(field.get(10, 0), None);
    }

    #[test]
    fn row_full_requires_every_column() {
        let mut field = Field::new();
        fill_row(&mut field, 19);
        assert!(field.is_row_full(19));

        field.set(4, 19, CELL_EMPTY);
        assert!(!field.is_row_full(19));

        // An item cell does not count as a locked block.
        field.set(4, 19, CELL_ITEM);
        assert!(!field.is_row_full(19));
    }

    #[test]
    fn clear_single_row_shifts_rows_above() {
        let mut field = Field::new();
        field.set(2, 18, CELL_BLOCK);
        fill_row(&mut field, 19);

        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19]);

        // The lone block above moved down by one; the top row is blank.
        assert_eq!(field.get(2, 19), Some(CELL_BLOCK));
        assert_eq!(field.get(2, 18), Some(CELL_EMPTY));
        assert!(field.cells()[..FIELD_WIDTH as usize]
            .iter()
            .all(|&c| c == CELL_EMPTY));
    }

    #[test]
    fn clear_multiple_nonadjacent_rows() {
        let mut field = Field::new();
        fill_row(&mut field, 19);
        fill_row(&mut field, 17);
        field.set(0, 18, CELL_BLOCK);
        field.set(9, 16, CELL_BLOCK);

        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        // Partial rows compact to the bottom, preserving their order.
        assert_eq!(field.get(0, 19), Some(CELL_BLOCK));
        assert_eq!(field.get(9, 18), Some(CELL_BLOCK));
        assert!(!field.is_row_full(19));
    }

    #[test]
    fn clear_resets_all_cells() {
        let mut field = Field::new();
        fill_row(&mut field, 5);
        field.clear();
        assert!(field.cells().iter().all(|&c| c == CELL_EMPTY));
    }

    #[test]
    fn write_grid_is_a_deep_copy() {
        let mut field = Field::new();
        field.set(1, 2, CELL_BLOCK);

        let mut grid = [[0u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];
        field.write_grid(&mut grid);
        assert_eq!(grid[2][1], CELL_BLOCK);

        // Mutating the copy leaves the field untouched.
        grid[2][1] = CELL_EMPTY;
        assert_eq!(field.get(1, 2), Some(CELL_BLOCK));
    }
}
