//! Scanline coverage classification of polygons against a tile grid

/// Per-column scanline classification
pub mod column;
/// Polygon normalization into tile-space edges
pub mod edges;
/// Classification pipeline and column fan-out
pub mod executor;
/// Edge splitting at vertical grid lines
pub mod splitting;
