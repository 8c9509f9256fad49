//! Weighted random collapse of a superposed cell

use crate::algorithm::wave::WaveGrid;
use crate::catalog::tiles::TileCatalog;
use crate::spatial::grid::Cell;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random source for reproducible collapse decisions
///
/// One sampler is threaded through a whole solve; it is the solver's only
/// source of randomness, so a fixed seed fixes the output exactly.
#[derive(Debug)]
pub struct WeightedSampler {
    rng: StdRng,
}

impl WeightedSampler {
    /// Create a deterministic sampler from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly choose one of `count` slots; 0 when `count` is zero
    pub fn uniform_index(&mut self, count: usize) -> usize {
        if count == 0 {
            0
        } else {
            self.rng.random_range(0..count)
        }
    }

    /// Weighted random choice over parallel weights, returning the chosen slot
    ///
    /// Draws once from the random stream and walks the cumulative
    /// distribution. Non-positive totals fall back to slot 0 without drawing.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut remaining = self.rng.random::<f64>() * total;
        for (slot, &weight) in weights.iter().enumerate() {
            remaining -= weight;
            if remaining <= 0.0 {
                return slot;
            }
        }
        weights.len().saturating_sub(1)
    }
}

/// Collapse the cell's candidate set to a single weighted-random tile
///
/// Cells holding one or zero candidates are left untouched and consume no
/// randomness; a superposed cell consumes exactly one draw. Returns the
/// chosen catalog index when a collapse happened.
pub fn collapse_cell(
    wave: &mut WaveGrid,
    cell: Cell,
    catalog: &TileCatalog,
    sampler: &mut WeightedSampler,
) -> Option<usize> {
    if wave.candidate_count(cell) <= 1 {
        return None;
    }

    let members: Vec<usize> = wave.candidates(cell).map(|set| set.iter().collect())?;
    let weights: Vec<f64> = members
        .iter()
        .filter_map(|&index| catalog.weight_of(index))
        .collect();
    if weights.len() != members.len() {
        return None;
    }

    let chosen = members.get(sampler.weighted_choice(&weights)).copied()?;
    wave.candidates_mut(cell)?.collapse_to(chosen);
    Some(chosen)
}
