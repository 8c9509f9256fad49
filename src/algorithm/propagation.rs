//! Breadth-first constraint propagation after a collapse

use crate::algorithm::bitset::TileSet;
use crate::algorithm::queue::EntropyQueue;
use crate::algorithm::wave::WaveGrid;
use crate::catalog::compatibility::CompatibilityIndex;
use crate::catalog::tiles::TileCatalog;
use crate::math::entropy::shannon_entropy_bits;
use crate::spatial::grid::{Cell, Direction};
use ndarray::Array2;
use std::collections::VecDeque;

/// Tighten neighboring candidate sets outward from a just-collapsed cell
///
/// Breadth-first sweep: each visited cell constrains its four still-superposed
/// neighbors, and a neighbor keeps candidate `t` only when some remaining tile
/// in the visited cell accepts `t` through the compatibility index, evaluated
/// toward the opposite side of the step direction. Neighbors that shrank are
/// re-enqueued at most once per sweep (the `queued` flags) and have their
/// queue priority refreshed with freshly computed entropy. A neighbor
/// reaching one candidate leaves the queue and carries its constraint onward;
/// a neighbor reaching zero leaves the queue and propagates no further.
///
/// Termination is guaranteed: every visit either leaves a neighbor unchanged,
/// which stops the sweep along that edge, or strictly shrinks a finite set.
pub fn propagate(
    wave: &mut WaveGrid,
    queue: &mut EntropyQueue,
    index: &CompatibilityIndex,
    catalog: &TileCatalog,
    from: Cell,
) {
    let size = wave.size();
    if !size.in_bounds(from) {
        return;
    }

    let mut queued = Array2::from_elem((size.rows, size.cols), false);
    let mut frontier = VecDeque::new();

    // Seed with the collapsed cell and its four neighbors; the collapsed
    // cell's own candidates are never rechecked against itself.
    push_cell(&mut frontier, &mut queued, from);
    for direction in Direction::ALL {
        if let Some(neighbor) = size.neighbor(from, direction) {
            push_cell(&mut frontier, &mut queued, neighbor);
        }
    }

    while let Some(current) = frontier.pop_front() {
        if let Some(flag) = queued.get_mut([current.row, current.col]) {
            *flag = false;
        }
        // Contradicted cells constrain nothing
        if wave.candidate_count(current) == 0 {
            continue;
        }

        for direction in Direction::ALL {
            let Some(neighbor) = size.neighbor(current, direction) else {
                continue;
            };
            if !wave.is_superposed(neighbor) {
                continue;
            }

            let Some(allowed) = allowed_neighbors(wave, index, catalog, current, direction) else {
                continue;
            };
            let before = wave.candidate_count(neighbor);
            let Some(set) = wave.candidates_mut(neighbor) else {
                continue;
            };
            set.intersect_with(&allowed);
            let after = set.len();
            if after == before {
                continue;
            }

            let key = size.flat_index(neighbor);
            if after > 1 {
                let weights = wave.candidate_weights(neighbor, catalog);
                if let Some(bits) = shannon_entropy_bits(&weights) {
                    queue.update(key, bits);
                }
                push_cell(&mut frontier, &mut queued, neighbor);
            } else {
                // Collapsed and contradicted cells hold no queue entry
                queue.remove(key);
                if after == 1 {
                    push_cell(&mut frontier, &mut queued, neighbor);
                }
            }
        }
    }
}

// Union of compatible-neighbor sets over the cell's remaining candidates,
// evaluated toward the opposite side of the step direction
fn allowed_neighbors(
    wave: &WaveGrid,
    index: &CompatibilityIndex,
    catalog: &TileCatalog,
    cell: Cell,
    direction: Direction,
) -> Option<TileSet> {
    let set = wave.candidates(cell)?;
    let mut allowed = TileSet::empty(catalog.len());
    for member in set.iter() {
        if let Some(tile) = catalog.get(member) {
            allowed.union_with(index.compatible_neighbors(tile, direction.opposite()));
        }
    }
    Some(allowed)
}

// Enqueue a cell once per pending round via the queued flags
fn push_cell(frontier: &mut VecDeque<Cell>, queued: &mut Array2<bool>, cell: Cell) {
    if let Some(flag) = queued.get_mut([cell.row, cell.col]) {
        if !*flag {
            *flag = true;
            frontier.push_back(cell);
        }
    }
}
