//! Classification limits and runtime configuration defaults

// Defaults mirror the demo view the classifier was first exercised in
/// Default grid width in pixels
pub const DEFAULT_GRID_WIDTH: f64 = 500.0;
/// Default grid height in pixels
pub const DEFAULT_GRID_HEIGHT: f64 = 700.0;
/// Default number of cells per grid side
pub const DEFAULT_RESOLUTION: usize = 30;

// Safety limits to prevent excessive memory allocation
/// Maximum allowed cells per grid side
pub const MAX_GRID_RESOLUTION: usize = 10_000;
/// Maximum rendered image side in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;
/// Largest tile-space coordinate magnitude accepted by the classifier
pub const MAX_TILE_COORDINATE: f64 = 1_000_000.0;

/// Column count above which classification fans out across threads
pub const PARALLEL_COLUMN_THRESHOLD: usize = 64;

// Random polygon generation
/// Fixed seed for reproducible random polygons
pub const DEFAULT_SEED: u64 = 42;
/// Smallest vertex count accepted for random polygons
pub const MIN_RANDOM_VERTICES: usize = 3;
/// Inner radius of random polygons as a fraction of the outer radius
pub const RANDOM_INNER_RADIUS_RATIO: f64 = 0.35;

// Output settings
/// Extension of polygon input files
pub const POLYGON_EXTENSION: &str = "poly";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_coverage";
/// Stem used for randomly generated polygons
pub const RANDOM_OUTPUT_STEM: &str = "random";

// Render colors (RGBA)
/// Background fill
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Fill for covered tiles
pub const COVERED_COLOR: [u8; 4] = [0, 0, 255, 255];
/// Fill for intersected tiles
pub const INTERSECTED_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Stroke for grid lines
pub const GRID_LINE_COLOR: [u8; 4] = [160, 180, 255, 255];
/// Stroke for the polygon outline
pub const OUTLINE_COLOR: [u8; 4] = [0, 0, 0, 255];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
