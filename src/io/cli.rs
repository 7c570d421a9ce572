//! Command-line interface for classifying polygon files against a tile grid

use crate::algorithm::edges::Point;
use crate::algorithm::executor::{CoverageClassifier, Dispatch};
use crate::io::configuration::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_RESOLUTION, DEFAULT_SEED, OUTPUT_SUFFIX,
    POLYGON_EXTENSION, RANDOM_OUTPUT_STEM,
};
use crate::io::error::{CoverageError, Result, invalid_parameter};
use crate::io::image::export_coverage_png;
use crate::io::polygon::load_polygon;
use crate::io::progress::ProgressManager;
use crate::io::report::{format_report, summary};
use crate::spatial::generator::random_polygon;
use crate::spatial::grid::GridSpace;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tilecover")]
#[command(
    author,
    version,
    about = "Classify grid tiles as covered or intersected by a polygon"
)]
/// Command-line arguments for the coverage tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Polygon file (one `x,y` vertex per line) or directory of `.poly` files
    #[arg(value_name = "TARGET", required_unless_present = "random")]
    pub target: Option<PathBuf>,

    /// Grid width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: f64,

    /// Grid height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: f64,

    /// Cells per grid side
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: usize,

    /// Classify a random star-shaped polygon with this many vertices instead of TARGET
    #[arg(long, value_name = "VERTICES", conflicts_with = "target")]
    pub random: Option<usize>,

    /// Random seed for reproducible polygons
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output image path for random polygons
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print every covered and intersected tile
    #[arg(short = 'p', long)]
    pub report: bool,

    /// Classify columns on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Enable debug logging (overridden by `RUST_LOG`)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Column dispatch selected by the flags
    pub const fn dispatch(&self) -> Dispatch {
        if self.sequential {
            Dispatch::Sequential
        } else {
            Dispatch::Auto
        }
    }

    /// Build the classifier for the configured grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size or resolution is invalid
    pub fn classifier(&self) -> Result<CoverageClassifier> {
        let grid = GridSpace::new(self.width, self.height, self.resolution)?;
        Ok(CoverageClassifier::new(grid).with_dispatch(self.dispatch()))
    }
}

/// Install the global tracing subscriber writing to stderr
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output from this crate when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "tilecover=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    // A subscriber may already be installed by an embedding application
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Orchestrates classification of polygon files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process the target (or random polygon) according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is invalid, target validation fails, or
    /// any polygon fails to load, classify or render
    pub fn process(&mut self) -> Result<()> {
        let classifier = self.cli.classifier()?;

        if let Some(vertex_count) = self.cli.random {
            return self.process_random(&classifier, vertex_count);
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            info!("nothing to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(&classifier, file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn process_random(&self, classifier: &CoverageClassifier, vertex_count: usize) -> Result<()> {
        let polygon = random_polygon(classifier.grid(), vertex_count, self.cli.seed)?;
        let output_path = self.cli.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{RANDOM_OUTPUT_STEM}{OUTPUT_SUFFIX}.png"))
        });
        self.classify_and_export(classifier, &polygon, &output_path)?;
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = self
            .cli
            .target
            .as_ref()
            .ok_or_else(|| invalid_parameter("target", &"<none>", &"a target is required"))?;

        if target.is_file() {
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let read_error = |e| CoverageError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(POLYGON_EXTENSION)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a polygon file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            warn!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, classifier: &CoverageClassifier, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let polygon = load_polygon(input_path)?;
        let output_path = Self::get_output_path(input_path);
        let line = self.classify_and_export(classifier, &polygon, &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(&line, start_time.elapsed());
        }

        Ok(())
    }

    // Returns the one-line summary of the classification
    fn classify_and_export(
        &self,
        classifier: &CoverageClassifier,
        polygon: &[Point],
        output_path: &Path,
    ) -> Result<String> {
        let result = classifier.classify(polygon)?;
        export_coverage_png(classifier.grid(), &result, polygon, output_path)?;

        let line = summary(&result);
        info!(output = %output_path.display(), "{line}");

        if self.cli.report {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(format_report(&result).as_bytes())?;
            stdout.flush()?;
        }

        Ok(line)
    }

    /// Output image path for a polygon file: `<stem>_coverage.png` beside it
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
