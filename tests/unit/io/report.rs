//! Tests for the text tile listing

#[cfg(test)]
mod tests {
    use tilecover::io::report::{format_report, summary};
    use tilecover::{CellClass, CoverageResult, Tile};

    // Tests sections list tiles in row-major order, covered first
    // Verified by listing intersected tiles first
    #[test]
    fn test_format_report() {
        let mut result = CoverageResult::new();
        result.insert(Tile::new(1, 0), CellClass::Covered);
        result.insert(Tile::new(0, 3), CellClass::Covered);
        result.insert(Tile::new(2, 2), CellClass::Intersected);

        let report = format_report(&result);
        let lines = report.lines().collect::<Vec<_>>();

        assert_eq!(
            lines,
            vec![
                "covered squares",
                "Row: 0, Column: 3",
                "Row: 1, Column: 0",
                "",
                "intersected squares",
                "Row: 2, Column: 2",
                "",
                "2 covered, 1 intersected",
            ]
        );
    }

    // Tests summary of an empty result
    // Verified by swapping the counts
    #[test]
    fn test_summary_empty() {
        assert_eq!(summary(&CoverageResult::new()), "0 covered, 0 intersected");
    }
}
