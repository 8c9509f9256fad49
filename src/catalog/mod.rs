//! Tile definitions and adjacency rules consumed by the solver

/// Per-direction edge-category adjacency index
pub mod compatibility;
/// Reference terrain catalog with the configured weighting scheme
pub mod presets;
/// Edge categories, tile definitions, and the deduplicated catalog
pub mod tiles;

pub use compatibility::CompatibilityIndex;
pub use tiles::{EdgeType, TileCatalog, TileDefinition};
