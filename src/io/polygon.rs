//! Plain-text polygon files
//!
//! One pixel-space vertex per line as `x,y` or `x y`. Blank lines and text
//! after `#` are ignored. The polygon closes implicitly; do not repeat the
//! first vertex at the end.

use std::path::Path;

use crate::algorithm::edges::Point;
use crate::io::error::{CoverageError, Result};

/// Parse polygon vertices from file contents
///
/// `path` is only used to label errors.
///
/// # Errors
///
/// Returns an error if a line does not hold exactly two numeric coordinates
pub fn parse_polygon(contents: &str, path: &Path) -> Result<Vec<Point>> {
    let mut vertices = Vec::new();

    for (index, raw_line) in contents.lines().enumerate() {
        let line = raw_line
            .split_once('#')
            .map_or(raw_line, |(content, _)| content)
            .trim();
        if line.is_empty() {
            continue;
        }

        let parse_error = |reason: String| CoverageError::PolygonParse {
            path: path.to_path_buf(),
            line: index + 1,
            reason,
        };

        let fields = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect::<Vec<_>>();

        let [x_field, y_field] = fields.as_slice() else {
            return Err(parse_error(format!(
                "expected 2 coordinates, found {}",
                fields.len()
            )));
        };

        let x = x_field
            .parse::<f64>()
            .map_err(|e| parse_error(format!("invalid x coordinate '{x_field}': {e}")))?;
        let y = y_field
            .parse::<f64>()
            .map_err(|e| parse_error(format!("invalid y coordinate '{y_field}': {e}")))?;

        vertices.push(Point::new(x, y));
    }

    Ok(vertices)
}

/// Read and parse a polygon file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse
pub fn load_polygon(path: &Path) -> Result<Vec<Point>> {
    let contents = std::fs::read_to_string(path).map_err(|e| CoverageError::FileSystem {
        path: path.to_path_buf(),
        operation: "read polygon",
        source: e,
    })?;
    parse_polygon(&contents, path)
}
