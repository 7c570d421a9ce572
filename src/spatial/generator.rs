//! Seeded random polygons for demos and property checks
//!
//! Polygons are star-shaped around a center: vertices are visited in angular
//! order with jittered angles and radii, so consecutive vertices never coincide
//! and the outline never crosses itself.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::edges::Point;
use crate::io::configuration::{MIN_RANDOM_VERTICES, RANDOM_INNER_RADIUS_RATIO};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::GridSpace;

/// Generate a star-shaped polygon with `vertex_count` vertices
///
/// The polygon is centered on `center` with outer radius `radius` (pixel space).
///
/// # Errors
///
/// Returns an error if `vertex_count` is below `MIN_RANDOM_VERTICES` or
/// `radius` is not a positive finite number
pub fn star_polygon(
    rng: &mut StdRng,
    center: Point,
    radius: f64,
    vertex_count: usize,
) -> Result<Vec<Point>> {
    if vertex_count < MIN_RANDOM_VERTICES {
        return Err(invalid_parameter(
            "vertex_count",
            &vertex_count,
            &format!("must be at least {MIN_RANDOM_VERTICES}"),
        ));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(invalid_parameter(
            "radius",
            &radius,
            &"must be a positive finite number",
        ));
    }

    let sector = TAU / vertex_count as f64;
    let vertices = (0..vertex_count)
        .map(|index| {
            // Jitter stays inside the sector so angular order is preserved
            let angle = (index as f64 + rng.random_range(0.1..0.9)) * sector;
            let distance = radius * rng.random_range(RANDOM_INNER_RADIUS_RATIO..=1.0);
            Point::new(
                distance.mul_add(angle.cos(), center.x),
                distance.mul_add(angle.sin(), center.y),
            )
        })
        .collect();

    Ok(vertices)
}

/// Generate a reproducible polygon filling most of the grid
///
/// # Errors
///
/// Returns an error if `vertex_count` is below `MIN_RANDOM_VERTICES`
pub fn random_polygon(grid: &GridSpace, vertex_count: usize, seed: u64) -> Result<Vec<Point>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let center = Point::new(grid.width() / 2.0, grid.height() / 2.0);
    let radius = 0.45 * grid.width().min(grid.height());
    star_polygon(&mut rng, center, radius, vertex_count)
}
