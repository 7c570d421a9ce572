//! Batch progress display for polygon file processing

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Tracks progress across a batch of polygon files
///
/// Shows one bar for the whole batch; the current file name and the last
/// result summary are shown as the bar's message.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
        }
    }

    /// Create the batch bar for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(Self::batch_style());
        self.bar = Some(bar);
        self.completed = 0;
    }

    /// Show which file is being classified
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Mark a file as done with a short result summary
    pub fn complete_file(&mut self, summary: &str, elapsed: Duration) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("{summary} ({} ms)", elapsed.as_millis()));
            bar.inc(1);
        }
    }

    /// Number of files completed since initialization
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template(&format!(
                "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}
