//! Board module - manages the puzzle grid
//!
//! The board is an R x C grid where each cell is empty or covered by a piece kind.
//! Uses a flat fixed-capacity array for cache locality and zero heap allocation,
//! so cloning a board for a history snapshot is a single memcpy.
//! Coordinates: (row, col) where row grows downward and col grows rightward.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::error::ConfigError;
use crate::types::{Cell, Coord, PieceKind, MAX_BOARD_CELLS, MAX_BOARD_DIM};

/// The puzzle board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: u8,
    cols: u8,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: ArrayVec<Cell, MAX_BOARD_CELLS>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: u8, cols: u8) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 || rows > MAX_BOARD_DIM || cols > MAX_BOARD_DIM {
            return Err(ConfigError::InvalidDimensions { rows, cols });
        }
        let mut cells = ArrayVec::new();
        for _ in 0..(rows as usize) * (cols as usize) {
            cells.push(None);
        }
        Ok(Self { rows, cols, cells })
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, at: Coord) -> Option<usize> {
        if self.is_out_of_bounds(at) {
            return None;
        }
        Some((at.row as usize) * (self.cols as usize) + (at.col as usize))
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Get cell at `at`
    /// Returns None if out of bounds
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.index(at).map(|idx| self.cells[idx])
    }

    /// Check if position is valid (within bounds and empty)
    #[inline]
    pub fn is_valid(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(Some(_)))
    }

    /// Check if position is out of bounds
    #[inline]
    pub fn is_out_of_bounds(&self, at: Coord) -> bool {
        at.row < 0 || at.row >= self.rows as i8 || at.col < 0 || at.col >= self.cols as i8
    }

    /// Cover every cell in `cells` with `kind`.
    ///
    /// Returns false, leaving the board untouched, if any cell is out of
    /// bounds or already covered.
    pub fn lock_piece(&mut self, cells: &[Coord], kind: PieceKind) -> bool {
        // First check if all positions are valid
        if !cells.iter().all(|&c| self.is_valid(c)) {
            return false;
        }

        // Then lock all cells
        for &c in cells {
            if let Some(idx) = self.index(c) {
                self.cells[idx] = Some(kind);
            }
        }

        true
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Every cell is covered.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// One row of cells, or None past the last row.
    pub fn row(&self, row: u8) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row as usize * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write per-cell codes (0 = empty, 1 + kind index otherwise), row-major.
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(
            self.cells
                .iter()
                .map(|c| c.map_or(0, |kind| kind.index() as u8 + 1)),
        );
    }

    /// Build a board from rows of cells, for tests and fixtures.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height > MAX_BOARD_DIM as usize
            || width > MAX_BOARD_DIM as usize
            || rows.iter().any(|r| r.len() != width)
        {
            return Err(ConfigError::InvalidDimensions {
                rows: height.min(u8::MAX as usize) as u8,
                cols: width.min(u8::MAX as usize) as u8,
            });
        }
        let mut board = Self::new(height as u8, width as u8)?;
        for (r, row) in rows.iter().enumerate() {
            let start = r * width;
            board.cells[start..start + width].copy_from_slice(row);
        }
        Ok(board)
    }

    /// Convert to 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}
