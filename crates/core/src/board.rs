//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or filled with a piece kind.
//! Uses a flat row-major vector sized once at creation; dimensions never change afterwards.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom (row 0 is the top).
//!
//! Collision treats every coordinate outside the grid as solid, on both axes.

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, MAX_BOARD_DIMENSION};

/// The game board using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat vector of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero or larger than [`MAX_BOARD_DIMENSION`].
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        assert!(
            width <= MAX_BOARD_DIMENSION && height <= MAX_BOARD_DIMENSION,
            "board dimensions must not exceed {MAX_BOARD_DIMENSION}"
        );
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// Each character is a piece letter (`I`, `J`, `L`, `O`, `S`, `T`, `Z`) or
    /// anything else for an empty cell. All rows must have the same length.
    ///
    /// ```
    /// use arena_tetris_core::Board;
    /// use arena_tetris_core::types::PieceKind;
    ///
    /// let board = Board::from_rows(&["....", "OO.I"]);
    /// assert_eq!(board.get(0, 1), Some(Some(PieceKind::O)));
    /// assert_eq!(board.get(2, 1), Some(None));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        assert!(
            rows.iter().all(|r| r.chars().count() == width),
            "rows must have equal length"
        );
        assert!(width <= u8::MAX as usize && height <= u8::MAX as usize);

        let mut board = Self::new(width as u8, height as u8);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                board.cells[y * width + x] = PieceKind::from_letter(ch);
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x as u8 >= self.width || y < 0 || y as u8 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check whether `shape` placed with its origin at `(x, y)` collides.
    ///
    /// True if any occupied shape cell lands outside the board (on either
    /// axis) or on an occupied board cell.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .minos()
            .iter()
            .any(|&(dx, dy, _)| !self.is_valid(x + dx, y + dy))
    }

    /// Write every occupied cell of `shape` into the board at `(x, y)`.
    ///
    /// The placement must not collide; callers check with [`Board::collides`]
    /// first. Cells that would land off the board are skipped.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8) {
        debug_assert!(!self.collides(shape, x, y), "merging a colliding shape");
        for (dx, dy, kind) in shape.minos() {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift every row above it down by one and insert an
    /// empty row at the top.
    /// Returns the number of rows removed (1 or 0)
    pub fn clear_row(&mut self, y: usize) -> usize {
        if y >= self.height as usize {
            return 0;
        }

        let width = self.width as usize;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);

        1
    }

    /// Remove completed rows, scanning from the bottom row up to row 1.
    ///
    /// Row 0 is never a candidate, even when full. After a removal the same
    /// index is checked again, since it now holds the row from above.
    /// Returns the number of rows removed.
    pub fn sweep_completed_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = self.height as usize - 1;

        while y > 0 {
            if self.is_row_full(y) {
                cleared += self.clear_row(y) as u32;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Set every cell to empty, keeping the dimensions
    pub fn reset_all(&mut self) {
        self.cells.fill(None);
    }

    /// One row as a slice
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Write the board as palette ids (`0` = empty) into `out`, row-major.
    ///
    /// Reuses the allocation of `out`.
    pub fn write_color_ids(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(
            self.cells
                .iter()
                .map(|cell| cell.map(PieceKind::color_id).unwrap_or(0)),
        );
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
