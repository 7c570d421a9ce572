//! Linear interpolation along straight edges
//!
//! Used when an edge is cut at a vertical grid line: the cut point keeps the
//! edge's slope, so the sub-edges chain end to end without gaps.

/// Height of the line through `(x0, y0)` and `(x1, y1)` at horizontal position `x`
///
/// Returns `None` for a vertical line, where the height is not a function of `x`.
// Only an exactly vertical line has no slope
#[allow(clippy::float_cmp)]
pub fn y_at_x(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> Option<f64> {
    let run = x1 - x0;
    if run == 0.0 {
        return None;
    }
    let slope = (y1 - y0) / run;
    Some((x - x0).mul_add(slope, y0))
}
