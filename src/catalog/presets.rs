//! Reference terrain catalog: grass, sand, and water with shoreline transitions

use crate::catalog::tiles::{EdgeType, TileDefinition};
use crate::io::configuration::{
    GRASS_SAND_WEIGHT, GRASS_WEIGHT, SAND_WATER_WEIGHT, SAND_WEIGHT, WATER_WEIGHT,
};

/// The reference tile set
///
/// Uniform terrain tiles plus one boundary tile per cardinal orientation for
/// each permitted seam. Grass↔sand and sand↔water seams exist; no tile
/// carries both a grass and a water edge, so grass never borders water.
pub fn reference_catalog() -> Vec<TileDefinition> {
    let mut tiles = vec![
        TileDefinition::uniform(EdgeType::Grass, GRASS_WEIGHT),
        TileDefinition::uniform(EdgeType::Sand, SAND_WEIGHT),
        TileDefinition::uniform(EdgeType::Water, WATER_WEIGHT),
    ];
    tiles.extend(boundary_variants(
        EdgeType::Grass,
        EdgeType::Sand,
        GRASS_SAND_WEIGHT,
    ));
    tiles.extend(boundary_variants(
        EdgeType::Sand,
        EdgeType::Water,
        SAND_WATER_WEIGHT,
    ));
    tiles
}

// One boundary tile per cardinal orientation: the far category occupies the
// named side, the near category the remaining three. Terrain identity stays
// with the near category.
fn boundary_variants(near: EdgeType, far: EdgeType, weight: f64) -> Vec<TileDefinition> {
    vec![
        TileDefinition::new(near, far, near, near, near, weight),
        TileDefinition::new(near, near, far, near, near, weight),
        TileDefinition::new(near, near, near, far, near, weight),
        TileDefinition::new(near, near, near, near, far, weight),
    ]
}
