//! Shortest hop paths through stored cells.
//!
//! Cells missing from the grid are obstacles. Every hop costs one, so the
//! search expands the reachable region one hop layer at a time and records
//! the predecessor of each cell the first time it is reached; a first
//! discovery is always at the minimum hop count and is never replaced.
//! Within a layer, cells closer (in hex distance) to the destination are
//! expanded first, which only decides which of several equally short paths
//! comes back and lets the search stop as soon as the destination is seen.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use hexmesh_topology::{Axial, HexKey};
use tracing::trace;

use crate::cell::Hex;
use crate::grid::Grid;

impl<T> Grid<T> {
    /// Shortest path from the cell at `from` to the cell at `to`, both included.
    ///
    /// Returns `None` if either endpoint is not stored or no chain of stored,
    /// adjacent cells connects them. When several shortest paths exist, which
    /// one is returned is unspecified.
    pub fn path(&self, from: impl Axial, to: impl Axial) -> Option<Vec<&Hex<T>>> {
        let start = HexKey::of(&from);
        let goal = HexKey::of(&to);
        let first = self.cells.get(&start)?;
        if !self.cells.contains_key(&goal) {
            return None;
        }
        if start == goal {
            return Some(vec![first]);
        }

        let target = goal.coord();
        let mut came_from: HashMap<HexKey, HexKey> = HashMap::new();
        came_from.insert(start, start);
        let mut frontier = vec![start];
        let mut hops = 0u32;

        while !frontier.is_empty() && !came_from.contains_key(&goal) {
            frontier.sort_by_key(|key| key.coord().distance(&target));

            let mut next = Vec::new();
            'layer: for &key in &frontier {
                for coord in key.coord().adjacent() {
                    let neighbour = HexKey::from(coord);
                    if !self.cells.contains_key(&neighbour) {
                        continue;
                    }
                    if let Entry::Vacant(slot) = came_from.entry(neighbour) {
                        slot.insert(key);
                        if neighbour == goal {
                            break 'layer;
                        }
                        next.push(neighbour);
                    }
                }
            }
            frontier = next;
            hops += 1;
        }

        if !came_from.contains_key(&goal) {
            trace!(%start, %goal, hops, explored = came_from.len(), "no path");
            return None;
        }
        trace!(%start, %goal, hops, explored = came_from.len(), "path found");

        let mut keys = vec![goal];
        let mut current = goal;
        while current != start {
            current = came_from[&current];
            keys.push(current);
        }
        keys.iter().rev().map(|key| self.cells.get(key)).collect()
    }

    /// Hop count of the shortest path between two cells.
    ///
    /// `None` means unreachable: an endpoint is missing or no path exists.
    pub fn distance(&self, from: impl Axial, to: impl Axial) -> Option<usize> {
        self.path(from, to).map(|path| path.len() - 1)
    }
}
