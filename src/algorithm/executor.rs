//! Coverage classification pipeline and per-column fan-out
//!
//! Stages run one way: vertices are normalized into tile-space edges, edges
//! are split at vertical grid lines, pieces are grouped by column, each column
//! is classified on its own and the per-column results are unioned.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::algorithm::column::{ColumnClassification, classify_column};
use crate::algorithm::edges::{Point, build_edges};
use crate::algorithm::splitting::{Segment, group_by_column, split_edges};
use crate::io::configuration::PARALLEL_COLUMN_THRESHOLD;
use crate::io::error::Result;
use crate::spatial::grid::GridSpace;
use crate::spatial::tiles::CoverageResult;

/// How columns are dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dispatch {
    /// Fan out across threads once the column count passes `PARALLEL_COLUMN_THRESHOLD`
    #[default]
    Auto,
    /// Always classify columns on the calling thread
    Sequential,
    /// Always fan out across the rayon thread pool
    Parallel,
}

/// Classifies polygons against a fixed grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageClassifier {
    grid: GridSpace,
    dispatch: Dispatch,
}

impl CoverageClassifier {
    /// Create a classifier for a grid with automatic dispatch
    pub const fn new(grid: GridSpace) -> Self {
        Self {
            grid,
            dispatch: Dispatch::Auto,
        }
    }

    /// Override how columns are dispatched
    #[must_use]
    pub const fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Grid this classifier works on
    pub const fn grid(&self) -> &GridSpace {
        &self.grid
    }

    /// Classify every tile a pixel-space polygon touches
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon is degenerate or reaches beyond the
    /// supported tile-space range
    pub fn classify(&self, vertices: &[Point]) -> Result<CoverageResult> {
        let edges = build_edges(&self.grid, vertices)?;
        let segments = split_edges(&edges);
        let segment_count = segments.len();
        let columns = group_by_column(segments);

        let parallel = match self.dispatch {
            Dispatch::Auto => columns.len() > PARALLEL_COLUMN_THRESHOLD,
            Dispatch::Sequential => false,
            Dispatch::Parallel => true,
        };

        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            segments = segment_count,
            columns = columns.len(),
            parallel,
            "classifying polygon"
        );

        let result = if parallel {
            classify_parallel(columns)
        } else {
            classify_sequential(columns)
        };

        debug!(
            covered = result.covered().len(),
            intersected = result.intersected().len(),
            "classification complete"
        );

        Ok(result)
    }
}

fn classify_sequential(columns: BTreeMap<i32, Vec<Segment>>) -> CoverageResult {
    columns
        .into_iter()
        .map(|(column, segments)| column_result(&classify_column(column, &segments)))
        .fold(CoverageResult::new(), CoverageResult::union)
}

fn classify_parallel(columns: BTreeMap<i32, Vec<Segment>>) -> CoverageResult {
    columns
        .into_par_iter()
        .map(|(column, segments)| column_result(&classify_column(column, &segments)))
        .reduce(CoverageResult::new, CoverageResult::union)
}

fn column_result(classification: &ColumnClassification) -> CoverageResult {
    trace!(
        column = classification.column(),
        min_row = classification.min_row(),
        rows = classification.rows().len(),
        "column classified"
    );
    let mut result = CoverageResult::new();
    for (tile, class) in classification.tiles() {
        result.insert(tile, class);
    }
    result
}

/// Classify the tiles of a square grid against a pixel-space polygon
///
/// The grid is `grid_width × grid_height` pixels split into
/// `grid_resolution` cells per side. Tiles outside the grid are reported
/// as-is; clipping is left to the caller.
///
/// # Errors
///
/// Returns an error if:
/// - The grid configuration is invalid (non-positive size, zero resolution)
/// - The polygon is degenerate (fewer than 3 vertices, coincident
///   consecutive vertices, non-finite coordinates)
/// - The polygon reaches beyond the supported tile-space range
pub fn classify_coverage(
    polygon_vertices: &[Point],
    grid_width: f64,
    grid_height: f64,
    grid_resolution: usize,
) -> Result<CoverageResult> {
    let grid = GridSpace::new(grid_width, grid_height, grid_resolution)?;
    CoverageClassifier::new(grid).classify(polygon_vertices)
}
