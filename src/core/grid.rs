//! Grid module - the letter matrix
//!
//! The grid is a rectangular matrix of single-character cells stored as a
//! flat row-major array for cache locality. Dimensions are fixed for the
//! session; block rotation mutates cells in place. All coordinate access is
//! bounds-checked and degrades to `None`/no-op, never panics.

use crate::core::selection::line_cells;
use crate::types::{Coord, Selection};

/// Rectangular letter grid with flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from row strings. Rows must be non-empty and of equal
    /// length; puzzle data is static and caller-validated.
    pub fn from_rows(rows: &[&str]) -> Self {
        debug_assert!(!rows.is_empty());
        let cols = rows.first().map_or(0, |r| r.chars().count());
        debug_assert!(rows.iter().all(|r| r.chars().count() == cols));

        let cells = rows.iter().flat_map(|r| r.chars()).collect();
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row >= self.rows || coord.col >= self.cols {
            return None;
        }
        Some(coord.row * self.cols + coord.col)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Get the character at a cell. Returns `None` if out of bounds.
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Set the character at a cell. Returns false if out of bounds.
    pub fn set(&mut self, coord: Coord, ch: char) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = ch;
                true
            }
            None => false,
        }
    }

    /// Top-left coordinate of the fixed 2x2 block containing a cell.
    ///
    /// Blocks are aligned to even row/col boundaries; every cell belongs to
    /// exactly one block regardless of session state.
    pub fn block_origin(coord: Coord) -> Coord {
        Coord::new(coord.row / 2 * 2, coord.col / 2 * 2)
    }

    /// Whether the block at the given cell can rotate: its bottom-right cell
    /// must be in bounds. Partial edge blocks on odd-dimension grids cannot.
    pub fn can_rotate_block(&self, coord: Coord) -> bool {
        let origin = Self::block_origin(coord);
        self.contains(Coord::new(origin.row + 1, origin.col + 1))
    }

    /// Rotate the 2x2 block containing the given cell clockwise:
    /// top-left ← bottom-left ← bottom-right ← top-right ← top-left.
    ///
    /// Returns false and leaves the grid unchanged when the block's
    /// bottom-right cell falls outside the grid.
    pub fn rotate_block(&mut self, coord: Coord) -> bool {
        let origin = Self::block_origin(coord);
        if !self.can_rotate_block(origin) {
            return false;
        }

        let tl = origin.row * self.cols + origin.col;
        let tr = tl + 1;
        let bl = tl + self.cols;
        let br = bl + 1;

        let temp = self.cells[tl];
        self.cells[tl] = self.cells[bl];
        self.cells[bl] = self.cells[br];
        self.cells[br] = self.cells[tr];
        self.cells[tr] = temp;
        true
    }

    /// Concatenate the grid's characters along a selection in
    /// increasing-index order (top-to-bottom or left-to-right), regardless
    /// of drag direction.
    ///
    /// Returns `None` for a non-aligned selection or one that leaves the
    /// grid.
    pub fn extract_word(&self, selection: Selection) -> Option<String> {
        let cells = line_cells(selection)?;
        cells.iter().map(|&coord| self.get(coord)).collect()
    }

    /// Convert to a 2D vector for tests/display
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| self.cells[r * self.cols..(r + 1) * self.cols].iter().collect())
            .collect()
    }
}
