//! Per-column scanline classification
//!
//! Each column is classified from the segments assigned to it and nothing
//! else. Rows crossed by a segment become `Intersected`; maximal runs of
//! untouched rows are then resolved inside or outside with one even-odd ray
//! cast per run, along the column's left boundary upwards in y.
//!
//! Two rules keep the ray cast well defined at exact grid coordinates:
//! - A vertical segment lying on the column's left boundary is ignored. It is
//!   the boundary the ray travels along, not something the ray crosses.
//! - A horizontal segment lying exactly on a grid line ends the current run.
//!   The polygon touches that line without spanning it, so the rows on either
//!   side may belong to different regions.

use bitvec::prelude::*;

use crate::algorithm::splitting::Segment;
use crate::math::rounding::{floor_to_int, is_integer};
use crate::spatial::tiles::{CellClass, Tile};

/// Row classifications of one column, starting at `min_row`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnClassification {
    column: i32,
    min_row: i32,
    rows: Vec<CellClass>,
}

impl ColumnClassification {
    /// Column index
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Row of the first entry in the buffer
    pub const fn min_row(&self) -> i32 {
        self.min_row
    }

    /// Classification buffer, one entry per row from `min_row`
    pub fn rows(&self) -> &[CellClass] {
        &self.rows
    }

    /// Classification of a row; rows outside the buffer are empty
    pub fn class_at(&self, row: i32) -> CellClass {
        usize::try_from(i64::from(row) - i64::from(self.min_row))
            .ok()
            .and_then(|index| self.rows.get(index))
            .copied()
            .unwrap_or_default()
    }

    /// Non-empty tiles of this column in increasing row order
    pub fn tiles(&self) -> impl Iterator<Item = (Tile, CellClass)> + '_ {
        (self.min_row..)
            .zip(&self.rows)
            .filter(|(_, class)| **class != CellClass::Empty)
            .map(|(row, &class)| (Tile::new(row, self.column), class))
    }
}

/// Classify every row a column's segments touch
///
/// `segments` must all satisfy `segment.column() == column`. An empty slice
/// yields an empty classification.
pub fn classify_column(column: i32, segments: &[Segment]) -> ColumnClassification {
    let Some((min_y, max_y)) = vertical_extent(segments) else {
        return ColumnClassification {
            column,
            min_row: 0,
            rows: Vec::new(),
        };
    };

    let min_row = floor_to_int(min_y);
    let max_row = floor_to_int(max_y);
    let row_count = usize::try_from(i64::from(max_row) - i64::from(min_row) + 1).unwrap_or(0);
    let row_index =
        |row: i32| usize::try_from(i64::from(row) - i64::from(min_row)).ok();

    let boundary = f64::from(column);
    let mut rows = vec![CellClass::Empty; row_count];
    let mut separators = bitvec![0; row_count];

    for segment in segments {
        if segment.is_vertical() && on_boundary(segment.left.x, boundary) {
            continue;
        }

        if segment.is_horizontal() && is_integer(segment.left.y) {
            if let Some(index) = row_index(floor_to_int(segment.left.y)).filter(|&i| i < row_count)
            {
                separators.set(index, true);
            }
        }

        let (lower_row, upper_row) = spanned_rows(segment);
        for row in lower_row..=upper_row {
            if let Some(cell) = row_index(row).and_then(|index| rows.get_mut(index)) {
                *cell = CellClass::Intersected;
            }
        }
    }

    let mut index = 0;
    while index < row_count {
        if rows.get(index) != Some(&CellClass::Empty) {
            index += 1;
            continue;
        }

        let run_start = index;
        let mut run_end = run_start + 1;
        while run_end < row_count
            && rows.get(run_end) == Some(&CellClass::Empty)
            && separators.get(run_end).as_deref() != Some(&true)
        {
            run_end += 1;
        }

        let ray_origin = f64::from(min_row) + run_start as f64;
        if crossings_above(segments, boundary, ray_origin) % 2 == 1 {
            if let Some(run) = rows.get_mut(run_start..run_end) {
                run.fill(CellClass::Covered);
            }
        }

        index = run_end;
    }

    ColumnClassification {
        column,
        min_row,
        rows,
    }
}

/// Smallest and largest endpoint y over all segments
fn vertical_extent(segments: &[Segment]) -> Option<(f64, f64)> {
    segments
        .iter()
        .flat_map(Segment::endpoints)
        .map(|point| point.y)
        .fold(None, |extent, y| match extent {
            None => Some((y, y)),
            Some((low, high)) => Some((low.min(y), high.max(y))),
        })
}

/// Inclusive row range a segment crosses
///
/// An upper endpoint exactly on a grid line does not reach into the row
/// above it. The range is empty (`lower > upper`) for horizontal segments on a
/// grid line.
fn spanned_rows(segment: &Segment) -> (i32, i32) {
    let low = segment.left.y.min(segment.right.y);
    let high = segment.left.y.max(segment.right.y);
    let lower_row = floor_to_int(low);
    let upper_row = if is_integer(high) {
        floor_to_int(high).saturating_sub(1)
    } else {
        floor_to_int(high)
    };
    (lower_row, upper_row)
}

/// Count segment endpoints on the left boundary strictly above `ray_origin`
///
/// Vertical segments are skipped; every other segment touching the boundary
/// leaves it towards the column interior and so crosses the ray once.
fn crossings_above(segments: &[Segment], boundary: f64, ray_origin: f64) -> usize {
    segments
        .iter()
        .filter(|segment| !segment.is_vertical())
        .flat_map(Segment::endpoints)
        .filter(|point| on_boundary(point.x, boundary) && point.y > ray_origin)
        .count()
}

// Tile-space boundaries are whole numbers, compared exactly
#[allow(clippy::float_cmp)]
const fn on_boundary(x: f64, boundary: f64) -> bool {
    x == boundary
}
