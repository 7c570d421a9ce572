//! Input/output operations, configuration and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Classification limits and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG rendering of classified grids
pub mod image;
/// Plain-text polygon file parsing
pub mod polygon;
/// Batch progress display
pub mod progress;
/// Text listing of classified tiles
pub mod report;
