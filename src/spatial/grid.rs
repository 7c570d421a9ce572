//! Grid geometry and conversion between pixel space and tile space
//!
//! Tile space divides each pixel axis by its tile dimension, so one unit is
//! one tile and grid lines fall on whole numbers. All classification runs in
//! tile space; pixel space is only used by callers and renderers.

use crate::algorithm::edges::Point;
use crate::io::configuration::MAX_GRID_RESOLUTION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::Tile;

/// Pixel-space rectangle covered by one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    /// Left edge in pixels
    pub x: f64,
    /// Top edge in pixels
    pub y: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

/// Square grid of `resolution × resolution` cells over a `width × height` pixel area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpace {
    width: f64,
    height: f64,
    resolution: usize,
    tile_width: f64,
    tile_height: f64,
}

impl GridSpace {
    /// Create a grid, validating its configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `width` or `height` is not a positive finite number
    /// - `resolution` is zero or exceeds `MAX_GRID_RESOLUTION`
    pub fn new(width: f64, height: f64, resolution: usize) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(invalid_parameter(
                "grid_width",
                &width,
                &"must be a positive finite number",
            ));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(invalid_parameter(
                "grid_height",
                &height,
                &"must be a positive finite number",
            ));
        }
        if resolution < 1 {
            return Err(invalid_parameter(
                "grid_resolution",
                &resolution,
                &"must be at least 1",
            ));
        }
        if resolution > MAX_GRID_RESOLUTION {
            return Err(invalid_parameter(
                "grid_resolution",
                &resolution,
                &format!("must not exceed {MAX_GRID_RESOLUTION}"),
            ));
        }

        let cells = resolution as f64;
        Ok(Self {
            width,
            height,
            resolution,
            tile_width: width / cells,
            tile_height: height / cells,
        })
    }

    /// Grid width in pixels
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Grid height in pixels
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Cells per grid side
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Width of one tile in pixels
    pub const fn tile_width(&self) -> f64 {
        self.tile_width
    }

    /// Height of one tile in pixels
    pub const fn tile_height(&self) -> f64 {
        self.tile_height
    }

    /// Convert a pixel-space point to tile space
    pub fn to_tile_space(&self, point: Point) -> Point {
        Point::new(point.x / self.tile_width, point.y / self.tile_height)
    }

    /// Convert a tile-space point back to pixel space
    pub fn to_pixel_space(&self, point: Point) -> Point {
        Point::new(point.x * self.tile_width, point.y * self.tile_height)
    }

    /// Pixel-space rectangle of a tile
    pub fn tile_rect(&self, tile: Tile) -> PixelRect {
        let origin = self.to_pixel_space(Point::new(f64::from(tile.col), f64::from(tile.row)));
        PixelRect {
            x: origin.x,
            y: origin.y,
            width: self.tile_width,
            height: self.tile_height,
        }
    }
}
