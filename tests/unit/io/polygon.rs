//! Tests for plain-text polygon file parsing

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tilecover::io::polygon::{load_polygon, parse_polygon};
    use tilecover::{CoverageError, Point};

    // Tests comma and whitespace separated vertices with comments
    // Verified by only splitting on commas
    #[test]
    fn test_parse_mixed_separators() {
        let contents = "# hexagon\n100,100\n150 150\n\n150, 100 # trailing note\n  -2.5e1\t3\n";
        let vertices = parse_polygon(contents, Path::new("hex.poly")).expect("valid polygon");

        assert_eq!(
            vertices,
            vec![
                Point::new(100.0, 100.0),
                Point::new(150.0, 150.0),
                Point::new(150.0, 100.0),
                Point::new(-25.0, 3.0),
            ]
        );
    }

    // Tests wrong field counts report the one-based line
    // Verified by reporting zero-based lines
    #[test]
    fn test_parse_wrong_field_count() {
        let error = parse_polygon("1,2\n3,4,5\n", Path::new("bad.poly"))
            .expect_err("three fields are invalid");

        match error {
            CoverageError::PolygonParse { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 3"));
            }
            other => unreachable!("Expected PolygonParse, got {other:?}"),
        }
    }

    // Tests non-numeric coordinates are rejected
    // Verified by defaulting unparsable fields to zero
    #[test]
    fn test_parse_non_numeric() {
        let result = parse_polygon("1,2\n3,four\n", Path::new("bad.poly"));
        assert!(matches!(
            result,
            Err(CoverageError::PolygonParse { line: 2, .. })
        ));
    }

    // Tests loading from disk and reporting missing files
    // Verified by swallowing read errors
    #[test]
    fn test_load_polygon() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("triangle.poly");
        std::fs::write(&path, "0,0\n10,0\n10,10\n").expect("Failed to write polygon");

        let vertices = load_polygon(&path).expect("valid polygon");
        assert_eq!(vertices.len(), 3);

        let missing = load_polygon(&temp_dir.path().join("missing.poly"));
        assert!(matches!(missing, Err(CoverageError::FileSystem { .. })));
    }
}
