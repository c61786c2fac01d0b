//! CLI entry point for cluster-in-mask quantification

use clap::Parser;
use maskquant::io::cli::{BatchProcessor, Cli};

fn main() -> maskquant::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli)?;
    processor.process()
}
