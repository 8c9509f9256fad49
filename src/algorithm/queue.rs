//! Entropy-ordered priority queue with arbitrary-key updates

use crate::io::error::{Result, SolverError};

/// One heap slot: a dense cell key and its entropy priority
#[derive(Clone, Copy, Debug)]
struct Entry {
    key: usize,
    priority: f64,
}

/// Binary min-heap over dense cell keys with a position map for O(log n)
/// arbitrary-key updates
///
/// The heap array and the position map form one structure: after every
/// mutation, `positions[key]` holds the heap slot currently occupied by
/// `key`. All sifting runs through a single swap path that moves both sides
/// together, including the move-last-to-root swap during extraction.
///
/// Priorities are entropy values and therefore finite; comparison never sees
/// a NaN through solver use.
#[derive(Clone, Debug)]
pub struct EntropyQueue {
    heap: Vec<Entry>,
    positions: Vec<Option<usize>>,
}

impl EntropyQueue {
    /// Create a queue accepting keys in `0..capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    /// Number of queued keys
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Test whether no keys are queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Test whether a key is currently queued
    pub fn contains(&self, key: usize) -> bool {
        self.position_of(key).is_some()
    }

    /// Queue a key with the given priority
    ///
    /// Keys outside the construction capacity and keys already present are
    /// ignored; callers changing a live entry use [`Self::update`] instead.
    pub fn insert(&mut self, key: usize, priority: f64) {
        if key >= self.positions.len() || self.contains(key) {
            return;
        }
        let slot = self.heap.len();
        self.heap.push(Entry { key, priority });
        self.set_position(key, Some(slot));
        self.sift_up(slot);
    }

    /// Remove and return the key with the least priority
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::QueueUnderflow`] when the queue is empty.
    pub fn extract_min(&mut self) -> Result<usize> {
        let root = self
            .heap
            .first()
            .copied()
            .ok_or(SolverError::QueueUnderflow {
                operation: "extract_min",
            })?;
        let last_slot = self.heap.len() - 1;
        self.swap_slots(0, last_slot);
        self.heap.pop();
        self.set_position(root.key, None);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(root.key)
    }

    /// Change the priority of a queued key and restore heap order
    ///
    /// Sifts up when the priority improved and down when it worsened. Absent
    /// keys are ignored.
    pub fn update(&mut self, key: usize, priority: f64) {
        let Some(slot) = self.position_of(key) else {
            return;
        };
        let Some(entry) = self.heap.get_mut(slot) else {
            return;
        };
        let previous = entry.priority;
        entry.priority = priority;
        if priority < previous {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    /// Drop a queued key without returning it; absent keys are ignored
    pub fn remove(&mut self, key: usize) {
        let Some(slot) = self.position_of(key) else {
            return;
        };
        let last_slot = self.heap.len() - 1;
        self.swap_slots(slot, last_slot);
        self.heap.pop();
        self.set_position(key, None);
        if slot < self.heap.len() {
            // The displaced entry may violate order in either direction
            self.sift_up(slot);
            self.sift_down(slot);
        }
    }

    /// Current priority of a queued key
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::PriorityNotFound`] when the key is not queued.
    pub fn priority_of(&self, key: usize) -> Result<f64> {
        self.position_of(key)
            .and_then(|slot| self.heap.get(slot))
            .map(|entry| entry.priority)
            .ok_or(SolverError::PriorityNotFound { key })
    }

    fn position_of(&self, key: usize) -> Option<usize> {
        self.positions.get(key).copied().flatten()
    }

    fn set_position(&mut self, key: usize, slot: Option<usize>) {
        if let Some(position) = self.positions.get_mut(key) {
            *position = slot;
        }
    }

    fn priority_at(&self, slot: usize) -> Option<f64> {
        self.heap.get(slot).map(|entry| entry.priority)
    }

    // Swap two heap slots, keeping the position map synchronized
    fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b || a >= self.heap.len() || b >= self.heap.len() {
            return;
        }
        self.heap.swap(a, b);
        if let Some(entry) = self.heap.get(a).copied() {
            self.set_position(entry.key, Some(a));
        }
        if let Some(entry) = self.heap.get(b).copied() {
            self.set_position(entry.key, Some(b));
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            let Some(current) = self.priority_at(slot) else {
                break;
            };
            let Some(above) = self.priority_at(parent) else {
                break;
            };
            if current < above {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let Some(mut best) = self.priority_at(slot) else {
                break;
            };
            let mut smallest = slot;
            if let Some(priority) = self.priority_at(left) {
                if priority < best {
                    smallest = left;
                    best = priority;
                }
            }
            if let Some(priority) = self.priority_at(right) {
                if priority < best {
                    smallest = right;
                }
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }
}
