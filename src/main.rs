//! CLI entry point for bisecting images into equalized and edge-detected halves

use clap::Parser;
use rastermatrix::io::cli::{Cli, FileProcessor};

fn main() -> rastermatrix::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
