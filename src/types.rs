//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Fixed tick for the main loop (milliseconds).
pub const TICK_MS: u32 = 16;

/// How long a freshly found word flashes over its span before it settles
/// into the found list (milliseconds).
pub const FOUND_FLASH_MS: u32 = 1000;

/// How long a rotated 2x2 block stays emphasized after a click (milliseconds).
pub const ROTATE_FLASH_MS: u32 = 300;

/// Upper bound on cells in one selection line. Selections are enumerated into
/// stack-allocated buffers; grids larger than this along one axis simply
/// cannot produce a full-length selection.
pub const MAX_LINE_LEN: usize = 32;

/// A grid cell position, 0-based, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Axis a straight-line selection runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

/// A candidate straight-line run of cells, defined by its two endpoints.
///
/// The endpoints are stored in drag order; a selection is only meaningful
/// when the endpoints share a row or a column. `start == end` is a valid
/// single-cell selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: Coord,
    pub end: Coord,
}

impl Selection {
    pub const fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }

    /// The axis this selection runs along, or `None` when the endpoints
    /// share neither a row nor a column.
    ///
    /// A single-cell selection reports `Axis::Row`.
    pub fn axis(&self) -> Option<Axis> {
        if self.start.row == self.end.row {
            Some(Axis::Row)
        } else if self.start.col == self.end.col {
            Some(Axis::Col)
        } else {
            None
        }
    }

    pub fn is_aligned(&self) -> bool {
        self.axis().is_some()
    }

    /// Endpoints reordered so the first is the lower index along both axes.
    pub fn normalized(&self) -> (Coord, Coord) {
        let lo = Coord::new(
            self.start.row.min(self.end.row),
            self.start.col.min(self.end.col),
        );
        let hi = Coord::new(
            self.start.row.max(self.end.row),
            self.start.col.max(self.end.col),
        );
        (lo, hi)
    }

    /// Number of cells covered, or `None` for a non-aligned selection.
    pub fn len(&self) -> Option<usize> {
        let (lo, hi) = self.normalized();
        match self.axis()? {
            Axis::Row => Some(hi.col - lo.col + 1),
            Axis::Col => Some(hi.row - lo.row + 1),
        }
    }

    /// Whether the selection line covers the given cell.
    ///
    /// Always false for a non-aligned selection.
    pub fn contains(&self, coord: Coord) -> bool {
        let (lo, hi) = self.normalized();
        match self.axis() {
            Some(Axis::Row) => {
                coord.row == lo.row && coord.col >= lo.col && coord.col <= hi.col
            }
            Some(Axis::Col) => {
                coord.col == lo.col && coord.row >= lo.row && coord.row <= hi.row
            }
            None => false,
        }
    }
}

/// Confirmation that a selection's extracted text matched an unfound theme
/// word. `span` is normalized (lower index first along both axes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub span: Selection,
}

/// Session lifecycle. One-way: a complete session never becomes in-progress
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    Complete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_detection() {
        let horizontal = Selection::new(Coord::new(2, 0), Coord::new(2, 4));
        assert_eq!(horizontal.axis(), Some(Axis::Row));

        let vertical = Selection::new(Coord::new(0, 3), Coord::new(5, 3));
        assert_eq!(vertical.axis(), Some(Axis::Col));

        let diagonal = Selection::new(Coord::new(0, 0), Coord::new(1, 1));
        assert_eq!(diagonal.axis(), None);
        assert!(!diagonal.is_aligned());
    }

    #[test]
    fn test_single_cell_selection_is_aligned() {
        let sel = Selection::new(Coord::new(3, 3), Coord::new(3, 3));
        assert!(sel.is_aligned());
        assert_eq!(sel.len(), Some(1));
    }

    #[test]
    fn test_normalized_reorders_reversed_endpoints() {
        let sel = Selection::new(Coord::new(0, 4), Coord::new(0, 1));
        let (lo, hi) = sel.normalized();
        assert_eq!(lo, Coord::new(0, 1));
        assert_eq!(hi, Coord::new(0, 4));
        assert_eq!(sel.len(), Some(4));
    }

    #[test]
    fn test_contains_is_direction_independent() {
        let forward = Selection::new(Coord::new(1, 1), Coord::new(4, 1));
        let reverse = Selection::new(Coord::new(4, 1), Coord::new(1, 1));
        for row in 1..=4 {
            assert!(forward.contains(Coord::new(row, 1)));
            assert!(reverse.contains(Coord::new(row, 1)));
        }
        assert!(!forward.contains(Coord::new(0, 1)));
        assert!(!forward.contains(Coord::new(2, 2)));
    }

    #[test]
    fn test_contains_rejects_non_aligned() {
        let diagonal = Selection::new(Coord::new(0, 0), Coord::new(2, 2));
        assert!(!diagonal.contains(Coord::new(1, 1)));
        assert!(!diagonal.contains(Coord::new(0, 0)));
    }
}
