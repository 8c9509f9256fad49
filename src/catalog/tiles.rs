//! Edge categories, tile definitions, and the deduplicated tile catalog

use crate::spatial::grid::Direction;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Terrain category presented on a tile edge
///
/// Adjacency is expressed purely in terms of these categories; what they look
/// like is entirely the renderer's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeType {
    /// Common open terrain
    Grass,
    /// Transitional terrain between grass and water
    Sand,
    /// Impassable terrain
    Water,
}

/// Immutable tile description: terrain identity, four edge categories, and a
/// selection weight
///
/// Identity is structural: two definitions with equal terrain and edges are
/// the same tile even when constructed independently, which is what lets
/// candidate sets and index buckets use value-keyed membership. The weight
/// participates in collapse sampling and entropy but not in identity.
#[derive(Clone, Copy, Debug)]
pub struct TileDefinition {
    /// Terrain identity reported to the renderer
    pub terrain: EdgeType,
    /// Edge category on the upper side
    pub up: EdgeType,
    /// Edge category on the right side
    pub right: EdgeType,
    /// Edge category on the lower side
    pub down: EdgeType,
    /// Edge category on the left side
    pub left: EdgeType,
    /// Relative selection weight, strictly positive
    pub weight: f64,
}

impl TileDefinition {
    /// Create a tile with explicit per-side edge categories
    pub const fn new(
        terrain: EdgeType,
        up: EdgeType,
        right: EdgeType,
        down: EdgeType,
        left: EdgeType,
        weight: f64,
    ) -> Self {
        Self {
            terrain,
            up,
            right,
            down,
            left,
            weight,
        }
    }

    /// Create a tile presenting the same category on all four edges
    pub const fn uniform(terrain: EdgeType, weight: f64) -> Self {
        Self::new(terrain, terrain, terrain, terrain, terrain, weight)
    }

    /// The edge category presented on the given side
    pub const fn edge(&self, direction: Direction) -> EdgeType {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }
}

impl PartialEq for TileDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.terrain == other.terrain
            && self.up == other.up
            && self.right == other.right
            && self.down == other.down
            && self.left == other.left
    }
}

impl Eq for TileDefinition {}

impl Hash for TileDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.terrain.hash(state);
        self.up.hash(state);
        self.right.hash(state);
        self.down.hash(state);
        self.left.hash(state);
    }
}

/// Deduplicated, index-addressable list of tile definitions
///
/// Candidate sets and the compatibility index refer to tiles by their dense
/// index into this catalog. Read-only after construction.
#[derive(Clone, Debug, Default)]
pub struct TileCatalog {
    tiles: Vec<TileDefinition>,
}

impl TileCatalog {
    /// Build a catalog from a list of definitions, dropping structural duplicates
    ///
    /// The first occurrence of a definition wins; later duplicates (equal
    /// terrain and edges, regardless of weight) are discarded.
    pub fn from_definitions(definitions: &[TileDefinition]) -> Self {
        let mut seen = HashSet::with_capacity(definitions.len());
        let mut tiles = Vec::with_capacity(definitions.len());
        for tile in definitions {
            if seen.insert(*tile) {
                tiles.push(*tile);
            }
        }
        Self { tiles }
    }

    /// Number of distinct tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile definition at the given dense index
    pub fn get(&self, index: usize) -> Option<&TileDefinition> {
        self.tiles.get(index)
    }

    /// All tiles in index order
    pub fn tiles(&self) -> &[TileDefinition] {
        &self.tiles
    }

    /// Selection weight of the tile at the given index, when present
    pub fn weight_of(&self, index: usize) -> Option<f64> {
        self.tiles.get(index).map(|tile| tile.weight)
    }

    /// First tile whose weight is not strictly positive and finite, if any
    pub fn invalid_weight(&self) -> Option<&TileDefinition> {
        self.tiles
            .iter()
            .find(|tile| !(tile.weight.is_finite() && tile.weight > 0.0))
    }
}
