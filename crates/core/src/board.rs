//! Board model - the 10x20 grid and its pure placement/line operations
//!
//! Uses a flat array for cache locality; the board is `Copy`-cheap, so every
//! structural operation (place, clear, effect) returns a new board instead of
//! mutating in place. Callers keep prior snapshots for replay/keyframes.
//!
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to
//! bottom. During spawn a piece may extend above row 0; those cells are not
//! stored and not collision-checked.

use arrayvec::ArrayVec;

use blocktris_types::{Cell, LockedCell, BOARD_HEIGHT, BOARD_WIDTH};

use crate::catalog::Shape;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (x, y); None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Return a board with the cell at (x, y) set; out-of-bounds writes are
    /// dropped
    pub fn with_cell(&self, x: i8, y: i8, cell: Cell) -> Self {
        let mut next = *self;
        if let Some(idx) = Self::index(x, y) {
            next.cells[idx] = cell;
        }
        next
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a shape can rest with its bounding-box origin at (x, y).
    ///
    /// Filled cells still above row 0 are permitted (spawn overlap); filled
    /// cells past the floor or outside a column are rejected, as is any
    /// overlap with an occupied visible cell.
    pub fn can_place(&self, shape: &Shape, x: i8, y: i8) -> bool {
        for (dx, dy) in shape.filled_offsets() {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return false;
            }
            if py >= 0 && self.is_occupied(px, py) {
                return false;
            }
        }
        true
    }

    /// Return a board with the shape written as locked cells. Cells still
    /// above row 0 are skipped; the input board is untouched.
    pub fn place(&self, shape: &Shape, x: i8, y: i8, material: LockedCell) -> Self {
        let mut next = *self;
        for (dx, dy) in shape.filled_offsets() {
            if let Some(idx) = Self::index(x + dx, y + dy) {
                next.cells[idx] = Some(material);
            }
        }
        next
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Indices of all completely filled rows, ascending
    pub fn full_rows(&self) -> ArrayVec<usize, { BOARD_HEIGHT as usize }> {
        let mut rows = ArrayVec::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                rows.push(y);
            }
        }
        rows
    }

    /// Return a board with the named rows removed, surviving rows shifted
    /// down, and empty rows inserted at the top.
    ///
    /// Single bottom-up compaction pass: each surviving row is copied to the
    /// next write position, so clearing multiple non-adjacent rows cannot
    /// skip or double-shift anything.
    pub fn clear_rows(&self, rows: &[usize]) -> Self {
        if rows.is_empty() {
            return *self;
        }

        let width = BOARD_WIDTH as usize;
        let mut next = Self::new();
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            let src = read_y * width;
            let dst = write_y * width;
            next.cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
        }

        next
    }

    /// Game-over predicate: any cell in the top row is occupied
    pub fn top_row_occupied(&self) -> bool {
        self.cells[..BOARD_WIDTH as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Perfect-clear predicate: no occupied cells anywhere
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
