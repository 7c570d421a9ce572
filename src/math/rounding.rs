//! Exact float-to-grid predicates shared by every scanline boundary test
//!
//! Boundary rules compare tile-space coordinates against whole numbers with
//! exact equality. No tolerance is applied anywhere: a coordinate is on a grid
//! line only if it is represented exactly.

use num_traits::Float;

/// Largest integer not greater than `value`, saturating at the `i32` bounds
pub fn floor_to_int<T: Float>(value: T) -> i32 {
    saturate(value.floor())
}

/// Smallest integer not less than `value`, saturating at the `i32` bounds
pub fn ceil_to_int<T: Float>(value: T) -> i32 {
    saturate(value.ceil())
}

/// Test whether `value` lies exactly on a whole number
// Grid lines are whole numbers in tile space; equality here is the contract
#[allow(clippy::float_cmp)]
pub fn is_integer<T: Float>(value: T) -> bool {
    value.is_finite() && value.floor() == value
}

/// Convert a whole-number float to `i32`, clamping out-of-range values
fn saturate<T: Float>(whole: T) -> i32 {
    whole.to_i32().unwrap_or_else(|| {
        if whole.is_sign_negative() {
            i32::MIN
        } else {
            i32::MAX
        }
    })
}
