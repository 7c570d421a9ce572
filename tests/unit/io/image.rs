//! Tests for PNG rendering of classified grids

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tilecover::io::configuration::{
        BACKGROUND_COLOR, COVERED_COLOR, GRID_LINE_COLOR, INTERSECTED_COLOR, MAX_IMAGE_DIMENSION,
        OUTLINE_COLOR,
    };
    use tilecover::io::image::{export_coverage_png, render_coverage};
    use tilecover::{CellClass, CoverageError, CoverageResult, GridSpace, Point, Tile};

    fn sample_result() -> CoverageResult {
        let mut result = CoverageResult::new();
        result.insert(Tile::new(1, 2), CellClass::Covered);
        result.insert(Tile::new(3, 0), CellClass::Intersected);
        result.insert(Tile::new(-1, 0), CellClass::Covered);
        result
    }

    // Tests image size and tile fills land on the right pixels
    // Verified by swapping row and column when filling
    #[test]
    fn test_render_fills_tiles() {
        let grid = GridSpace::new(40.0, 80.0, 4).expect("valid grid");
        let img = render_coverage(&grid, &sample_result(), &[])
            .expect("grid fits in an image");

        assert_eq!(img.dimensions(), (40, 80));
        // Tile (1, 2) spans x 20..30, y 20..40
        assert_eq!(img.get_pixel(25, 30), &Rgba(COVERED_COLOR));
        // Tile (3, 0) spans x 0..10, y 60..80
        assert_eq!(img.get_pixel(5, 70), &Rgba(INTERSECTED_COLOR));
        assert_eq!(img.get_pixel(35, 50), &Rgba(BACKGROUND_COLOR));
    }

    // Tests grid lines are drawn at tile boundaries
    // Verified by drawing lines at tile centers
    #[test]
    fn test_render_grid_lines() {
        let grid = GridSpace::new(40.0, 40.0, 4).expect("valid grid");
        let img = render_coverage(&grid, &CoverageResult::new(), &[])
            .expect("grid fits in an image");

        assert_eq!(img.get_pixel(10, 5), &Rgba(GRID_LINE_COLOR));
        assert_eq!(img.get_pixel(5, 20), &Rgba(GRID_LINE_COLOR));
        assert_eq!(img.get_pixel(5, 5), &Rgba(BACKGROUND_COLOR));
    }

    // Tests the polygon outline is stroked including the closing edge
    // Verified by skipping the closing edge
    #[test]
    fn test_render_outline() {
        let grid = GridSpace::new(40.0, 40.0, 4).expect("valid grid");
        let polygon = [
            Point::new(2.5, 2.5),
            Point::new(36.5, 2.5),
            Point::new(36.5, 36.5),
        ];
        let img = render_coverage(&grid, &CoverageResult::new(), &polygon)
            .expect("grid fits in an image");

        assert_eq!(img.get_pixel(15, 2), &Rgba(OUTLINE_COLOR));
        assert_eq!(img.get_pixel(36, 15), &Rgba(OUTLINE_COLOR));
        // Closing edge runs along the diagonal
        assert_eq!(img.get_pixel(25, 25), &Rgba(OUTLINE_COLOR));
    }

    // Tests export writes a readable PNG, creating parent directories
    // Verified by not creating parent directories
    #[test]
    fn test_export_coverage_png() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = temp_dir.path().join("nested").join("out_coverage.png");
        let grid = GridSpace::new(40.0, 80.0, 4).expect("valid grid");

        export_coverage_png(&grid, &sample_result(), &[], &output).expect("export succeeds");

        let loaded = image::open(&output).expect("Failed to read exported image");
        assert_eq!((loaded.width(), loaded.height()), (40, 80));
    }

    // Tests grids too large to render are rejected before allocating the image
    // Verified by removing the image size limit
    #[test]
    fn test_render_rejects_oversized_grid() {
        let grid = GridSpace::new(1e6, 1e6, 8).expect("valid grid");
        let result = render_coverage(&grid, &CoverageResult::new(), &[]);

        assert!(matches!(
            result,
            Err(CoverageError::InvalidParameter {
                parameter: "grid_width",
                ..
            })
        ));

        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = temp_dir.path().join("huge_coverage.png");
        assert!(export_coverage_png(&grid, &CoverageResult::new(), &[], &output).is_err());
        assert!(!output.exists());
    }

    // Tests the largest allowed side still renders
    // Verified by making the limit exclusive
    #[test]
    fn test_render_at_size_limit() {
        let side = f64::from(MAX_IMAGE_DIMENSION);
        let tall = GridSpace::new(1.0, side, 1).expect("valid grid");
        let img = render_coverage(&tall, &CoverageResult::new(), &[]).expect("within limit");
        assert_eq!(img.dimensions(), (1, MAX_IMAGE_DIMENSION));

        let too_tall = GridSpace::new(1.0, side + 1.0, 1).expect("valid grid");
        assert!(matches!(
            render_coverage(&too_tall, &CoverageResult::new(), &[]),
            Err(CoverageError::InvalidParameter {
                parameter: "grid_height",
                ..
            })
        ));
    }
}
