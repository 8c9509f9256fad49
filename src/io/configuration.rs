//! Solver constants and runtime configuration defaults

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 32;

/// Default number of grid columns
pub const DEFAULT_COLS: usize = 32;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Reference weighting scheme: common terrain near 1.0, rare terrain lower.
// Any positive weights work; these only shape the preset catalog.
/// Selection weight for uniform grass tiles
pub const GRASS_WEIGHT: f64 = 1.0;
/// Selection weight for uniform sand tiles
pub const SAND_WEIGHT: f64 = 0.7;
/// Selection weight for uniform water tiles
pub const WATER_WEIGHT: f64 = 0.4;
/// Selection weight for grass-to-sand boundary tiles
pub const GRASS_SAND_WEIGHT: f64 = 0.25;
/// Selection weight for sand-to-water boundary tiles
pub const SAND_WATER_WEIGHT: f64 = 0.2;

// Output settings
/// Edge length in pixels of one rendered cell
pub const CELL_PIXEL_SIZE: u32 = 8;
/// Default output path for the rendered grid
pub const DEFAULT_OUTPUT: &str = "terrain.png";

// Progress bar display settings
/// Width of the solve progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
