//! Error types for grid configuration, polygon validation and output operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all coverage operations
#[derive(Debug)]
pub enum CoverageError {
    /// Grid configuration validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Polygon cannot be classified by the even-odd scanline
    ///
    /// Occurs when the polygon has:
    /// - Fewer than three vertices
    /// - Two consecutive coincident vertices (including last to first)
    /// - A vertex with a non-finite coordinate
    DegeneratePolygon {
        /// Description of the degeneracy
        reason: String,
    },

    /// Tile-space coordinate too large to allocate row buffers for
    OutOfRange {
        /// The offending tile-space coordinate
        coordinate: f64,
        /// Largest accepted magnitude
        limit: f64,
    },

    /// Polygon file could not be parsed
    PolygonParse {
        /// Path to the polygon file
        path: PathBuf,
        /// One-based line number of the offending line
        line: usize,
        /// Description of the syntax problem
        reason: String,
    },

    /// Failed to save rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CoverageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DegeneratePolygon { reason } => {
                write!(f, "Degenerate polygon: {reason}")
            }
            Self::OutOfRange { coordinate, limit } => {
                write!(
                    f,
                    "Tile-space coordinate {coordinate} exceeds the supported range of ±{limit}"
                )
            }
            Self::PolygonParse { path, line, reason } => {
                write!(
                    f,
                    "Failed to parse polygon '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CoverageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for coverage results
pub type Result<T> = std::result::Result<T, CoverageError>;

impl From<std::io::Error> for CoverageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CoverageError {
    CoverageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a degenerate polygon error
pub fn degenerate_polygon(reason: &impl ToString) -> CoverageError {
    CoverageError::DegeneratePolygon {
        reason: reason.to_string(),
    }
}
