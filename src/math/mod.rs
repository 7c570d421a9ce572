//! Numeric helpers for the scanline classifier

/// Linear interpolation along edges cut at grid lines
pub mod interpolation;
/// Floor, ceiling and integrality predicates for grid boundary tests
pub mod rounding;
