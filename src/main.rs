//! CLI entry point for the wave function collapse terrain generator

use clap::Parser;
use wavetile::io::cli::{Cli, GenerationRunner};

fn main() -> wavetile::Result<()> {
    let cli = Cli::parse();
    let runner = GenerationRunner::new(cli);
    runner.run()
}
