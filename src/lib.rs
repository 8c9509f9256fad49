//! Edge-constrained wave function collapse over a 2D tile grid
//!
//! The solver keeps a superposition of candidate tiles for every cell,
//! repeatedly collapses the lowest-entropy cell to a single weighted-random
//! tile, and propagates the resulting adjacency constraints breadth-first
//! until every cell is either resolved or contradicted.

#![forbid(unsafe_code)]

/// Core solver implementation: candidate sets, entropy queue, collapse, and propagation
pub mod algorithm;
/// Tile definitions, adjacency indexing, and the reference terrain catalog
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for entropy calculations
pub mod math;
/// Grid geometry: cells, directions, and bounds
pub mod spatial;

pub use io::error::{Result, SolverError};
