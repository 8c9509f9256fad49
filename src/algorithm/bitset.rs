//! Dense bitset over catalog tile indices

use bitvec::prelude::*;
use std::fmt;

/// Fixed-capacity set of tile indices backing candidate sets and index buckets
///
/// Indices are dense positions into the tile catalog. Provides O(1) membership
/// testing and word-parallel intersection and union.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    bits: BitVec,
}

impl TileSet {
    /// Create a set containing no tiles
    pub fn empty(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Create a set containing every tile index below `capacity`
    pub fn all(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
        }
    }

    /// Maximum number of distinct indices the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a tile index; out-of-range indices are ignored
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Remove a tile index; out-of-range indices are ignored
    pub fn remove(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, false);
        }
    }

    /// Test tile membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Count tiles in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Keep only tiles also present in `other`
    ///
    /// Both sets must share a capacity; candidate sets and index buckets are
    /// always sized to the same catalog.
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Add every tile present in `other`
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Shrink the set to the single given member
    ///
    /// Used by collapse; the index is expected to already be a member.
    pub fn collapse_to(&mut self, index: usize) {
        self.bits.fill(false);
        self.insert(index);
    }

    /// Iterate member indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// The single member of a collapsed set, when exactly one tile remains
    pub fn sole_member(&self) -> Option<usize> {
        (self.len() == 1).then(|| self.iter().next()).flatten()
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileSet({} of {})", self.len(), self.capacity())
    }
}
