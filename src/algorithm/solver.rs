//! Solver orchestration: the seeded run loop over collapse and propagation

use crate::algorithm::collapse::{WeightedSampler, collapse_cell};
use crate::algorithm::propagation::propagate;
use crate::algorithm::queue::EntropyQueue;
use crate::algorithm::wave::{ResultGrid, WaveGrid};
use crate::catalog::compatibility::CompatibilityIndex;
use crate::catalog::tiles::{TileCatalog, TileDefinition};
use crate::io::configuration::{DEFAULT_SEED, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::math::entropy::shannon_entropy_bits;
use crate::spatial::grid::GridSize;

/// Wave function collapse solver for a single grid
///
/// Owns the wave state, entropy queue, and random stream of one solve. The
/// catalog and compatibility index are read-only once built; all mutable
/// state lives here and is discarded with the solver. The run is
/// single-threaded and blocking, and a fixed seed reproduces the output
/// exactly for a fixed catalog and grid size.
#[derive(Debug)]
pub struct WaveSolver {
    catalog: TileCatalog,
    index: CompatibilityIndex,
    size: GridSize,
    wave: WaveGrid,
    queue: EntropyQueue,
    sampler: WeightedSampler,
    started: bool,
}

impl WaveSolver {
    /// Create a solver with every cell in full superposition
    ///
    /// All cells start identical, so a single entropy value seeds every
    /// queue entry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidParameter`] when a grid dimension
    /// exceeds [`MAX_GRID_DIMENSION`] or a catalog weight is not strictly
    /// positive and finite.
    pub fn new(catalog: TileCatalog, rows: usize, cols: usize, seed: u64) -> Result<Self> {
        if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "grid dimensions",
                &format!("{rows}x{cols}"),
                &format!("each dimension must be at most {MAX_GRID_DIMENSION}"),
            ));
        }
        if let Some(tile) = catalog.invalid_weight() {
            return Err(invalid_parameter(
                "tile weight",
                &tile.weight,
                &"every tile weight must be strictly positive and finite",
            ));
        }

        let size = GridSize::new(rows, cols);
        let index = CompatibilityIndex::build(&catalog);
        let wave = WaveGrid::full(size, &catalog);
        let mut queue = EntropyQueue::new(size.cell_count());

        // Only superposed cells belong in the queue; a catalog of one tile
        // leaves every cell collapsed from the start
        if catalog.len() > 1 {
            let weights: Vec<f64> = catalog.tiles().iter().map(|tile| tile.weight).collect();
            if let Some(bits) = shannon_entropy_bits(&weights) {
                for key in 0..size.cell_count() {
                    queue.insert(key, bits);
                }
            }
        }

        Ok(Self {
            catalog,
            index,
            size,
            wave,
            queue,
            sampler: WeightedSampler::new(seed),
            started: false,
        })
    }

    /// Total number of cells in the grid
    pub const fn cell_count(&self) -> usize {
        self.size.cell_count()
    }

    /// Number of cells still awaiting collapse
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Read access to the wave state, for inspection and tests
    pub const fn wave(&self) -> &WaveGrid {
        &self.wave
    }

    /// Perform one collapse-and-propagate iteration
    ///
    /// The first call collapses a uniformly random starting cell; subsequent
    /// calls take the minimum-entropy cell from the queue. Returns `false`
    /// once no superposed cells remain.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::SolverError::QueueUnderflow`] from the queue; the
    /// emptiness check above the extraction makes that unreachable here.
    pub fn step(&mut self) -> Result<bool> {
        if self.queue.is_empty() {
            return Ok(false);
        }

        let key = if self.started {
            self.queue.extract_min()?
        } else {
            self.started = true;
            let start = self.sampler.uniform_index(self.size.cell_count());
            self.queue.remove(start);
            start
        };

        let cell = self.size.cell_at(key);
        collapse_cell(&mut self.wave, cell, &self.catalog, &mut self.sampler);
        propagate(
            &mut self.wave,
            &mut self.queue,
            &self.index,
            &self.catalog,
            cell,
        );
        Ok(true)
    }

    /// Drive the run loop to completion
    ///
    /// # Errors
    ///
    /// Propagates the (normally unreachable) queue errors from [`Self::step`].
    pub fn run(&mut self) -> Result<()> {
        while self.step()? {}
        Ok(())
    }

    /// Materialize the output grid from the current wave state
    pub fn result(&self) -> ResultGrid {
        self.wave.materialize(&self.catalog)
    }
}

/// Solve a grid in a single call
///
/// Zero-area grids yield an empty result grid trivially; an empty catalog
/// yields a grid where every cell is unresolved. A contradicted cell is a
/// legitimate terminal state surfaced as `None` in the output, never an
/// error; callers needing full resolution re-run with different randomness
/// or a richer catalog.
///
/// # Errors
///
/// Returns [`crate::SolverError::InvalidParameter`] for oversized dimensions
/// or non-positive catalog weights.
pub fn solve(
    definitions: &[TileDefinition],
    rows: usize,
    cols: usize,
    seed: Option<u64>,
) -> Result<ResultGrid> {
    let catalog = TileCatalog::from_definitions(definitions);
    let mut solver = WaveSolver::new(catalog, rows, cols, seed.unwrap_or(DEFAULT_SEED))?;
    solver.run()?;
    Ok(solver.result())
}
