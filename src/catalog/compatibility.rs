//! Per-direction adjacency index from edge categories to candidate tiles

use crate::algorithm::bitset::TileSet;
use crate::catalog::tiles::{EdgeType, TileCatalog, TileDefinition};
use crate::spatial::grid::Direction;
use std::collections::HashMap;

/// Precomputed lookup answering "which tiles may sit in direction `d` from me"
///
/// For every tile `t` and direction `d`, `t` is filed under `(d, edge(t, d))`,
/// the tile's own edge category on side `d`. Querying with a tile's edge on
/// the same side therefore returns, in O(1) average time, every tile
/// presenting a matching category there. The stored relation need not be
/// symmetric across opposite sides; propagation applies the one-directional
/// acceptance policy against exactly this lookup.
///
/// Read-only after construction and safe to share between concurrent solves.
/// Must be rebuilt whenever the catalog changes.
#[derive(Clone, Debug)]
pub struct CompatibilityIndex {
    buckets: [HashMap<EdgeType, TileSet>; 4],
    empty: TileSet,
}

impl CompatibilityIndex {
    /// Build the index from a catalog
    pub fn build(catalog: &TileCatalog) -> Self {
        let capacity = catalog.len();
        let mut buckets: [HashMap<EdgeType, TileSet>; 4] = std::array::from_fn(|_| HashMap::new());
        for (index, tile) in catalog.tiles().iter().enumerate() {
            for direction in Direction::ALL {
                if let Some(bucket) = buckets.get_mut(direction.index()) {
                    bucket
                        .entry(tile.edge(direction))
                        .or_insert_with(|| TileSet::empty(capacity))
                        .insert(index);
                }
            }
        }
        Self {
            buckets,
            empty: TileSet::empty(capacity),
        }
    }

    /// Tiles that may occupy the neighbor slot in `direction` from `tile`
    ///
    /// Edge categories absent from the index yield the empty set; the query
    /// never fails.
    pub fn compatible_neighbors(&self, tile: &TileDefinition, direction: Direction) -> &TileSet {
        self.buckets
            .get(direction.index())
            .and_then(|bucket| bucket.get(&tile.edge(direction)))
            .unwrap_or(&self.empty)
    }
}
