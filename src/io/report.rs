//! Text listing of classified tiles

use std::fmt::Write as _;

use crate::spatial::tiles::{CoverageResult, Tile};

/// Format both tile sets, covered first, in row-major order
///
/// Ends with a summary line holding both counts.
pub fn format_report(result: &CoverageResult) -> String {
    let mut report = String::new();
    write_section(&mut report, "covered squares", result.covered().iter());
    write_section(&mut report, "intersected squares", result.intersected().iter());
    let _ = writeln!(report, "{}", summary(result));
    report
}

/// One-line count of covered and intersected tiles
pub fn summary(result: &CoverageResult) -> String {
    format!(
        "{} covered, {} intersected",
        result.covered().len(),
        result.intersected().len()
    )
}

fn write_section<'a>(report: &mut String, title: &str, tiles: impl Iterator<Item = &'a Tile>) {
    let _ = writeln!(report, "{title}");
    for tile in tiles {
        let _ = writeln!(report, "{tile}");
    }
    report.push('\n');
}
