//! Spatial data structures for grid classification
//!
//! This module contains spatial-related functionality including:
//! - Grid geometry and pixel/tile space conversion
//! - Tile identifiers and the coverage result
//! - Random polygon generation

/// Random star-shaped polygon generation
pub mod generator;
/// Grid geometry and coordinate space conversion
pub mod grid;
/// Tile identifiers, cell classes and coverage results
pub mod tiles;

pub use grid::GridSpace;
pub use tiles::{CellClass, CoverageResult, Tile};
