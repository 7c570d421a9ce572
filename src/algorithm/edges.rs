//! Polygon vertices to directed tile-space edges
//!
//! The polygon is implicitly closed. Edges are produced by pairing each vertex
//! with its predecessor in the cyclic order, which places the closing edge
//! (last vertex to first) at the front without special-casing it.

use std::fmt;

use crate::io::configuration::MAX_TILE_COORDINATE;
use crate::io::error::{CoverageError, Result, degenerate_polygon};
use crate::spatial::grid::GridSpace;

/// A point in either pixel space or tile space
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, increasing downwards
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Test whether both coordinates are finite
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A directed polygon edge in tile space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Where the edge starts
    pub start: Point,
    /// Where the edge ends
    pub end: Point,
}

impl Edge {
    /// Create an edge from `start` to `end`
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Test whether both endpoints share an x coordinate
    // Vertical means exactly vertical; tile-space grid lines are exact
    #[allow(clippy::float_cmp)]
    pub const fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}

/// Build the closed edge list of a polygon given in pixel space
///
/// Returns one edge per vertex: the closing edge first, then the remaining
/// edges in vertex order, all converted to tile space.
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than three vertices are given
/// - A vertex has a non-finite coordinate
/// - Two consecutive vertices coincide in tile space (including the last and first)
/// - A vertex lies beyond `MAX_TILE_COORDINATE` in tile space
pub fn build_edges(grid: &GridSpace, vertices: &[Point]) -> Result<Vec<Edge>> {
    if vertices.len() < 3 {
        return Err(degenerate_polygon(&format!(
            "expected at least 3 vertices, got {}",
            vertices.len()
        )));
    }

    if let Some((index, vertex)) = vertices
        .iter()
        .enumerate()
        .find(|(_, vertex)| !vertex.is_finite())
    {
        return Err(degenerate_polygon(&format!(
            "vertex {index} has a non-finite coordinate {vertex:?}"
        )));
    }

    let tile_vertices = vertices
        .iter()
        .map(|&vertex| grid.to_tile_space(vertex))
        .collect::<Vec<_>>();

    for vertex in &tile_vertices {
        for coordinate in [vertex.x, vertex.y] {
            if coordinate.abs() > MAX_TILE_COORDINATE {
                return Err(CoverageError::OutOfRange {
                    coordinate,
                    limit: MAX_TILE_COORDINATE,
                });
            }
        }
    }

    let tile_predecessors = tile_vertices.iter().cycle().skip(tile_vertices.len() - 1);

    // Distinct pixel points may still collapse together after scaling
    vertices
        .iter()
        .zip(tile_vertices.iter().zip(tile_predecessors))
        .enumerate()
        .map(|(index, (vertex, (&end, &start)))| {
            if start == end {
                return Err(degenerate_polygon(&format!(
                    "edge {index} has zero length at {vertex:?}"
                )));
            }
            Ok(Edge::new(start, end))
        })
        .collect()
}
