//! Straight-line selection enumeration.
//!
//! Selections come in from the pointer layer as raw endpoint pairs; this
//! module turns them into ordered cell runs without allocating.

use arrayvec::ArrayVec;

use crate::types::{Axis, Coord, Selection, MAX_LINE_LEN};

/// Every cell covered by a selection, ordered from the lower to the higher
/// index along the varying axis.
///
/// This ordering is what the renderer highlights and what word extraction
/// reads, independent of drag direction. Returns `None` when the endpoints
/// share neither a row nor a column, or when the line would exceed
/// [`MAX_LINE_LEN`] cells.
pub fn line_cells(selection: Selection) -> Option<ArrayVec<Coord, MAX_LINE_LEN>> {
    let axis = selection.axis()?;
    let (lo, hi) = selection.normalized();

    let mut cells = ArrayVec::new();
    match axis {
        Axis::Row => {
            for col in lo.col..=hi.col {
                cells.try_push(Coord::new(lo.row, col)).ok()?;
            }
        }
        Axis::Col => {
            for row in lo.row..=hi.row {
                cells.try_push(Coord::new(row, lo.col)).ok()?;
            }
        }
    }
    Some(cells)
}
