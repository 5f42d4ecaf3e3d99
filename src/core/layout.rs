//! Pointer-to-cell mapping.
//!
//! A `GridLayout` describes where the grid sits on screen (origin) and how
//! big each cell is (stride). Hit-testing is integer division by the stride;
//! the same layout positions cells for rendering, so drawing and hit-testing
//! can never disagree.

use crate::types::Coord;

/// Screen placement of the grid: origin plus fixed per-cell stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    /// Cell stride in terminal columns.
    pub cell_w: u16,
    /// Cell stride in terminal rows.
    pub cell_h: u16,
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    pub fn new(
        origin_x: u16,
        origin_y: u16,
        cell_w: u16,
        cell_h: u16,
        rows: usize,
        cols: usize,
    ) -> Self {
        debug_assert!(cell_w > 0 && cell_h > 0);
        Self {
            origin_x,
            origin_y,
            cell_w,
            cell_h,
            rows,
            cols,
        }
    }

    /// Map an absolute pointer position to a grid cell.
    ///
    /// Pure function of the inputs; returns `None` outside grid bounds.
    pub fn cell_at(&self, px: u16, py: u16) -> Option<Coord> {
        if px < self.origin_x || py < self.origin_y {
            return None;
        }
        let col = ((px - self.origin_x) / self.cell_w) as usize;
        let row = ((py - self.origin_y) / self.cell_h) as usize;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(Coord::new(row, col))
    }

    /// Top-left screen position of a cell. Inverse of [`cell_at`] for the
    /// cell's first pixel; used by the renderer.
    ///
    /// [`cell_at`]: GridLayout::cell_at
    pub fn cell_origin(&self, coord: Coord) -> (u16, u16) {
        (
            self.origin_x + coord.col as u16 * self.cell_w,
            self.origin_y + coord.row as u16 * self.cell_h,
        )
    }

    /// Total grid size on screen (width, height) in terminal cells.
    pub fn size(&self) -> (u16, u16) {
        (
            self.cols as u16 * self.cell_w,
            self.rows as u16 * self.cell_h,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_maps_interior_points() {
        let layout = GridLayout::new(10, 5, 4, 2, 8, 8);

        // First pixel of the first cell.
        assert_eq!(layout.cell_at(10, 5), Some(Coord::new(0, 0)));
        // Last pixel of the first cell.
        assert_eq!(layout.cell_at(13, 6), Some(Coord::new(0, 0)));
        // First pixel of the next cell over.
        assert_eq!(layout.cell_at(14, 5), Some(Coord::new(0, 1)));
        assert_eq!(layout.cell_at(10, 7), Some(Coord::new(1, 0)));
        // Last cell.
        assert_eq!(layout.cell_at(41, 20), Some(Coord::new(7, 7)));
    }

    #[test]
    fn test_cell_at_rejects_outside_grid() {
        let layout = GridLayout::new(10, 5, 4, 2, 8, 8);

        // Left/above the origin.
        assert_eq!(layout.cell_at(9, 5), None);
        assert_eq!(layout.cell_at(10, 4), None);
        assert_eq!(layout.cell_at(0, 0), None);
        // Past the last cell.
        assert_eq!(layout.cell_at(42, 5), None);
        assert_eq!(layout.cell_at(10, 21), None);
    }

    #[test]
    fn test_cell_origin_round_trips() {
        let layout = GridLayout::new(3, 2, 5, 2, 4, 6);
        for row in 0..4 {
            for col in 0..6 {
                let coord = Coord::new(row, col);
                let (x, y) = layout.cell_origin(coord);
                assert_eq!(layout.cell_at(x, y), Some(coord));
            }
        }
    }
}
