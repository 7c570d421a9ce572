//! Scanline classification of square grid tiles against an arbitrary polygon
//!
//! Every tile is either untouched, crossed by the polygon boundary
//! (intersected) or fully enclosed by the polygon interior (covered). Edges
//! are split at vertical grid lines and each column is classified on its own
//! with an even-odd ray cast, so columns can be processed in parallel.
//!
//! ```
//! use tilecover::{Point, classify_coverage};
//!
//! let square = [
//!     Point::new(20.0, 20.0),
//!     Point::new(60.0, 20.0),
//!     Point::new(60.0, 60.0),
//!     Point::new(20.0, 60.0),
//! ];
//! let result = classify_coverage(&square, 100.0, 100.0, 10)?;
//! assert_eq!(result.covered().len(), 16);
//! assert!(result.intersected().is_empty());
//! # Ok::<(), tilecover::CoverageError>(())
//! ```

#![forbid(unsafe_code)]

/// Polygon normalization, edge splitting and column classification
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Numeric helpers for exact grid boundary tests
pub mod math;
/// Grid geometry, tiles and coverage results
pub mod spatial;

pub use algorithm::edges::Point;
pub use algorithm::executor::{CoverageClassifier, Dispatch, classify_coverage};
pub use io::error::{CoverageError, Result};
pub use spatial::{CellClass, CoverageResult, GridSpace, Tile};
