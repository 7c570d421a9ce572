//! CLI entry point for polygon tile coverage classification

use clap::Parser;
use tilecover::io::cli::{Cli, FileProcessor, init_logging};

fn main() -> tilecover::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
