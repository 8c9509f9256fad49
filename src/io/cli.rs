//! Command-line interface for generating terrain grids

use crate::algorithm::solver::WaveSolver;
use crate::catalog::presets::reference_catalog;
use crate::catalog::tiles::TileCatalog;
use crate::io::configuration::{
    CELL_PIXEL_SIZE, DEFAULT_COLS, DEFAULT_OUTPUT, DEFAULT_ROWS, DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::image::export_result_as_png;
use crate::io::progress::SolveProgress;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Generate edge-constrained tile maps via wave function collapse"
)]
/// Command-line arguments for the terrain generator
pub struct Cli {
    /// Number of grid rows
    #[arg(short = 'r', long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(short = 'c', long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Edge length in pixels of one rendered cell
    #[arg(long, default_value_t = CELL_PIXEL_SIZE)]
    pub scale: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Drives one solve from CLI arguments: catalog, run loop, report, export
pub struct GenerationRunner {
    cli: Cli,
}

impl GenerationRunner {
    /// Create a runner from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve the grid and export the rendering
    ///
    /// # Errors
    ///
    /// Returns an error if parameters fail validation or the PNG export
    /// fails.
    pub fn run(&self) -> Result<()> {
        let catalog = TileCatalog::from_definitions(&reference_catalog());
        let mut solver = WaveSolver::new(catalog, self.cli.rows, self.cli.cols, self.cli.seed)?;

        let total = solver.cell_count();
        let progress = SolveProgress::new(total, !self.cli.should_show_progress());
        while solver.step()? {
            progress.update(total, solver.remaining());
        }

        let grid = solver.result();
        let resolved = grid.iter().filter(|cell| cell.is_some()).count();
        progress.summary(&format!(
            "resolved {resolved}/{} cells ({} contradicted)",
            grid.len(),
            grid.len() - resolved
        ));
        progress.finish();

        if grid.is_empty() {
            return Ok(());
        }
        export_result_as_png(&grid, self.cli.scale, &self.cli.output)
    }
}
