//! Tile identifiers, per-cell classification and the sparse coverage result

use std::collections::BTreeSet;
use std::fmt;

use ndarray::Array2;

/// One grid cell, identified by integer row and column
///
/// Rows and columns may fall outside `[0, resolution)` when the polygon
/// extends past the grid; clipping is left to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    /// Row index (tile-space y)
    pub row: i32,
    /// Column index (tile-space x)
    pub col: i32,
}

impl Tile {
    /// Create a tile from row and column indices
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Test whether the tile lies inside a square grid of `resolution` cells per side
    pub fn in_bounds(&self, resolution: usize) -> bool {
        let limit = i64::try_from(resolution).unwrap_or(i64::MAX);
        (0..limit).contains(&i64::from(self.row)) && (0..limit).contains(&i64::from(self.col))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row: {}, Column: {}", self.row, self.col)
    }
}

/// Classification of a single cell against the polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellClass {
    /// Untouched by the polygon
    #[default]
    Empty,
    /// Crossed by the polygon boundary
    Intersected,
    /// Fully enclosed by the polygon interior
    Covered,
}

/// Covered and intersected tiles for one polygon
///
/// The two sets are disjoint; a tile in neither is implicitly empty.
/// Ordered sets keep iteration row-major and results set-comparable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageResult {
    covered: BTreeSet<Tile>,
    intersected: BTreeSet<Tile>,
}

impl CoverageResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classification for a tile
    ///
    /// `Intersected` takes precedence: an intersected tile is never demoted to
    /// covered, and marking a covered tile intersected moves it across.
    /// `Empty` records nothing.
    pub fn insert(&mut self, tile: Tile, class: CellClass) {
        match class {
            CellClass::Empty => {}
            CellClass::Intersected => {
                self.covered.remove(&tile);
                self.intersected.insert(tile);
            }
            CellClass::Covered => {
                if !self.intersected.contains(&tile) {
                    self.covered.insert(tile);
                }
            }
        }
    }

    /// Union another result into this one, preserving disjointness
    pub fn merge(&mut self, other: Self) {
        for tile in other.intersected {
            self.insert(tile, CellClass::Intersected);
        }
        for tile in other.covered {
            self.insert(tile, CellClass::Covered);
        }
    }

    /// Functional form of [`CoverageResult::merge`], suitable for folds
    #[must_use]
    pub fn union(mut self, other: Self) -> Self {
        self.merge(other);
        self
    }

    /// Classification of a tile
    pub fn class_of(&self, tile: Tile) -> CellClass {
        if self.intersected.contains(&tile) {
            CellClass::Intersected
        } else if self.covered.contains(&tile) {
            CellClass::Covered
        } else {
            CellClass::Empty
        }
    }

    /// Tiles fully enclosed by the polygon
    pub const fn covered(&self) -> &BTreeSet<Tile> {
        &self.covered
    }

    /// Tiles crossed by the polygon boundary
    pub const fn intersected(&self) -> &BTreeSet<Tile> {
        &self.intersected
    }

    /// Test whether no tile was touched
    pub fn is_empty(&self) -> bool {
        self.covered.is_empty() && self.intersected.is_empty()
    }

    /// Copy of this result without tiles outside `[0, resolution)`
    #[must_use]
    pub fn clipped(&self, resolution: usize) -> Self {
        Self {
            covered: self
                .covered
                .iter()
                .filter(|tile| tile.in_bounds(resolution))
                .copied()
                .collect(),
            intersected: self
                .intersected
                .iter()
                .filter(|tile| tile.in_bounds(resolution))
                .copied()
                .collect(),
        }
    }

    /// Dense `resolution × resolution` view indexed by `[row, col]`
    ///
    /// Tiles outside the grid are dropped.
    pub fn to_dense(&self, resolution: usize) -> Array2<CellClass> {
        let mut dense = Array2::from_elem((resolution, resolution), CellClass::Empty);
        let clipped = self.clipped(resolution);
        let classified = clipped
            .covered
            .iter()
            .map(|tile| (tile, CellClass::Covered))
            .chain(
                clipped
                    .intersected
                    .iter()
                    .map(|tile| (tile, CellClass::Intersected)),
            );
        for (tile, class) in classified {
            if let Some(cell) = dense.get_mut([tile.row as usize, tile.col as usize]) {
                *cell = class;
            }
        }
        dense
    }
}
