//! Superposition grid state and result materialization

use crate::algorithm::bitset::TileSet;
use crate::catalog::tiles::{TileCatalog, TileDefinition};
use crate::spatial::grid::{Cell, GridSize};
use ndarray::Array2;

/// Final output: one optional tile per cell, `None` where unresolved
pub type ResultGrid = Array2<Option<TileDefinition>>;

/// Mutable solver state holding every cell's candidate set
///
/// Candidate sets start as the full catalog and only ever shrink. A set of
/// size 1 is collapsed, size 0 is contradicted, and anything larger is still
/// superposed.
#[derive(Clone, Debug)]
pub struct WaveGrid {
    candidates: Array2<TileSet>,
    size: GridSize,
}

impl WaveGrid {
    /// Create a grid with every cell in full superposition over the catalog
    pub fn full(size: GridSize, catalog: &TileCatalog) -> Self {
        let candidates = Array2::from_elem((size.rows, size.cols), TileSet::all(catalog.len()));
        Self { candidates, size }
    }

    /// Grid dimensions
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Candidate set at the given cell, when in bounds
    pub fn candidates(&self, cell: Cell) -> Option<&TileSet> {
        self.candidates.get([cell.row, cell.col])
    }

    /// Mutable candidate set at the given cell, when in bounds
    pub fn candidates_mut(&mut self, cell: Cell) -> Option<&mut TileSet> {
        self.candidates.get_mut([cell.row, cell.col])
    }

    /// Number of candidates remaining at the given cell; 0 when out of bounds
    pub fn candidate_count(&self, cell: Cell) -> usize {
        self.candidates(cell).map_or(0, TileSet::len)
    }

    /// Whether the cell still has more than one candidate
    pub fn is_superposed(&self, cell: Cell) -> bool {
        self.candidate_count(cell) > 1
    }

    /// Selection weights of the remaining candidates at the given cell
    pub fn candidate_weights(&self, cell: Cell, catalog: &TileCatalog) -> Vec<f64> {
        self.candidates(cell).map_or_else(Vec::new, |set| {
            set.iter()
                .filter_map(|index| catalog.weight_of(index))
                .collect()
        })
    }

    /// Materialize the final output grid
    ///
    /// Cells holding exactly one candidate resolve to that tile; contradicted
    /// and still-superposed cells emit `None`.
    pub fn materialize(&self, catalog: &TileCatalog) -> ResultGrid {
        Array2::from_shape_fn((self.size.rows, self.size.cols), |(row, col)| {
            self.candidates
                .get([row, col])
                .and_then(TileSet::sole_member)
                .and_then(|index| catalog.get(index).copied())
        })
    }
}
