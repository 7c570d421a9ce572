//! PNG rendering of a classified grid with the polygon outline on top

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::algorithm::edges::Point;
use crate::io::configuration::{
    BACKGROUND_COLOR, COVERED_COLOR, GRID_LINE_COLOR, INTERSECTED_COLOR, MAX_IMAGE_DIMENSION,
    OUTLINE_COLOR,
};
use crate::io::error::{CoverageError, Result, invalid_parameter};
use crate::math::rounding::{ceil_to_int, floor_to_int};
use crate::spatial::grid::{GridSpace, PixelRect};
use crate::spatial::tiles::CoverageResult;

/// Draw the grid, both tile sets and the polygon outline
///
/// The image is `width × height` pixels of the grid. Tiles outside the grid
/// and outline parts beyond the image are clipped.
///
/// # Errors
///
/// Returns an error if either image side would exceed `MAX_IMAGE_DIMENSION`
pub fn render_coverage(
    grid: &GridSpace,
    result: &CoverageResult,
    polygon: &[Point],
) -> Result<RgbaImage> {
    let width = image_side("grid_width", grid.width())?;
    let height = image_side("grid_height", grid.height())?;
    let mut img = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR));

    let clipped = result.clipped(grid.resolution());
    for tile in clipped.covered() {
        fill_rect(&mut img, grid.tile_rect(*tile), Rgba(COVERED_COLOR));
    }
    for tile in clipped.intersected() {
        fill_rect(&mut img, grid.tile_rect(*tile), Rgba(INTERSECTED_COLOR));
    }

    draw_grid_lines(&mut img, grid);

    if let Some(&last) = polygon.last() {
        let mut previous = last;
        for &vertex in polygon {
            draw_line(&mut img, previous, vertex, Rgba(OUTLINE_COLOR));
            previous = vertex;
        }
    }

    Ok(img)
}

// Pixel count along one side, rejecting sizes too large to allocate
fn image_side(parameter: &'static str, size: f64) -> Result<u32> {
    let pixels = ceil_to_int(size).max(1);
    u32::try_from(pixels)
        .ok()
        .filter(|&side| side <= MAX_IMAGE_DIMENSION)
        .ok_or_else(|| {
            invalid_parameter(
                parameter,
                &size,
                &format!("rendered images are limited to {MAX_IMAGE_DIMENSION} pixels per side"),
            )
        })
}

/// Render and save a classified grid as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The grid is too large to render
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_coverage_png(
    grid: &GridSpace,
    result: &CoverageResult,
    polygon: &[Point],
    output_path: &Path,
) -> Result<()> {
    let img = render_coverage(grid, result, polygon)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CoverageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| CoverageError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

fn fill_rect(img: &mut RgbaImage, rect: PixelRect, color: Rgba<u8>) {
    let x_range = clamp_span(rect.x, rect.x + rect.width, img.width());
    let y_range = clamp_span(rect.y, rect.y + rect.height, img.height());
    for y in y_range {
        for x in x_range.clone() {
            img.put_pixel(x, y, color);
        }
    }
}

// Pixel indices covering [start, end), clamped to [0, limit)
fn clamp_span(start: f64, end: f64, limit: u32) -> std::ops::Range<u32> {
    let limit = i64::from(limit);
    let first = i64::from(floor_to_int(start)).clamp(0, limit);
    let last = i64::from(ceil_to_int(end)).clamp(0, limit);
    first as u32..last as u32
}

fn draw_grid_lines(img: &mut RgbaImage, grid: &GridSpace) {
    let color = Rgba(GRID_LINE_COLOR);
    let (width, height) = img.dimensions();
    for line in 0..=grid.resolution() {
        let offset = line as f64;
        let x = floor_to_int(offset * grid.tile_width());
        if let Ok(x) = u32::try_from(x) {
            if x < width {
                for y in 0..height {
                    img.put_pixel(x, y, color);
                }
            }
        }
        let y = floor_to_int(offset * grid.tile_height());
        if let Ok(y) = u32::try_from(y) {
            if y < height {
                for x in 0..width {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }
}

// Samples the segment at sub-pixel spacing; enough for a one-pixel outline
fn draw_line(img: &mut RgbaImage, from: Point, to: Point, color: Rgba<u8>) {
    let (width, height) = img.dimensions();
    let steps = ((to.x - from.x).abs().max((to.y - from.y).abs()) * 2.0).ceil();
    let steps = if steps.is_finite() { steps.clamp(1.0, 1.0e6) } else { 1.0 };
    let step_count = steps as u32;
    for step in 0..=step_count {
        let t = f64::from(step) / steps;
        let x = floor_to_int((to.x - from.x).mul_add(t, from.x));
        let y = floor_to_int((to.y - from.y).mul_add(t, from.y));
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            if x < width && y < height {
                img.put_pixel(x, y, color);
            }
        }
    }
}
