//! CLI entry point for the tile rearrangement tool

use clap::Parser;
use retile::io::cli::{Cli, TileProcessor};

fn main() -> retile::Result<()> {
    let cli = Cli::parse();
    let mut processor = TileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
