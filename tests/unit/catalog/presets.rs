//! Tests for the reference terrain catalog

#[cfg(test)]
mod tests {
    use wavetile::catalog::presets::reference_catalog;
    use wavetile::catalog::tiles::{EdgeType, TileCatalog, TileDefinition};
    use wavetile::spatial::grid::Direction;

    // Tests the preset roster: three uniforms plus eight boundary tiles
    // Verified by dropping one boundary orientation from the variants
    #[test]
    fn test_reference_roster() {
        let tiles = reference_catalog();
        assert_eq!(tiles.len(), 11);

        let catalog = TileCatalog::from_definitions(&tiles);
        assert_eq!(catalog.len(), 11, "preset tiles must be structurally distinct");
    }

    // Tests every preset weight is strictly positive
    // Verified by zeroing one preset weight constant
    #[test]
    fn test_weights_positive() {
        let catalog = TileCatalog::from_definitions(&reference_catalog());
        assert!(catalog.invalid_weight().is_none());
    }

    // Tests no preset tile carries both grass and water edges
    // Verified by adding a grass-water boundary variant
    #[test]
    fn test_no_grass_water_seam() {
        for tile in reference_catalog() {
            let edges: Vec<EdgeType> = Direction::ALL
                .iter()
                .map(|&direction| tile.edge(direction))
                .collect();
            let has_grass = edges.contains(&EdgeType::Grass);
            let has_water = edges.contains(&EdgeType::Water);
            assert!(
                !(has_grass && has_water),
                "tile {tile:?} would let grass touch water"
            );
        }
    }

    // Tests the three uniform terrain tiles are present
    // Verified by replacing the uniform water tile with a sand duplicate
    #[test]
    fn test_uniform_tiles_present() {
        let tiles = reference_catalog();
        for terrain in [EdgeType::Grass, EdgeType::Sand, EdgeType::Water] {
            let uniform = TileDefinition::uniform(terrain, 1.0);
            assert!(
                tiles.iter().any(|tile| *tile == uniform),
                "missing uniform {terrain:?} tile"
            );
        }
    }
}
