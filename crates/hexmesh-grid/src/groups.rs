//! Connected components over a subset of a grid.

use std::collections::HashSet;

use hexmesh_topology::{Axial, HexKey};
use tracing::{debug, trace};

use crate::cell::Hex;
use crate::grid::Grid;

impl<T> Grid<T> {
    /// Partition `subset` into groups of mutually reachable cells.
    ///
    /// Two cells are connected when a chain of adjacent steps links them
    /// using only cells of `subset`; stored cells outside the subset do not
    /// carry connectivity. Coordinates in `subset` that hold no cell are
    /// ignored, and duplicates count once. Every remaining cell lands in
    /// exactly one group. Groups are seeded in `subset` order; the order of
    /// cells inside a group is unspecified.
    pub fn groups<I>(&self, subset: I) -> Vec<Vec<&Hex<T>>>
    where
        I: IntoIterator,
        I::Item: Axial,
    {
        let mut seeds = Vec::new();
        let mut members = HashSet::new();
        for pos in subset {
            let key = HexKey::of(&pos);
            if !self.cells.contains_key(&key) {
                trace!(%key, "grouping skips a coordinate with no cell");
                continue;
            }
            if members.insert(key) {
                seeds.push(key);
            }
        }

        let mut assigned: HashSet<HexKey> = HashSet::with_capacity(members.len());
        let mut groups = Vec::new();
        for seed in seeds {
            if !assigned.insert(seed) {
                continue;
            }

            let mut group = vec![seed];
            let mut stack = vec![seed];
            while let Some(key) = stack.pop() {
                for coord in key.coord().adjacent() {
                    let neighbour = HexKey::from(coord);
                    if members.contains(&neighbour) && assigned.insert(neighbour) {
                        group.push(neighbour);
                        stack.push(neighbour);
                    }
                }
            }

            groups.push(group.iter().filter_map(|key| self.cells.get(key)).collect());
        }

        debug!(cells = members.len(), groups = groups.len(), "grouped cells");
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RingOptions;
    use hexmesh_topology::CubeCoord;

    fn ring_grid() -> Grid<()> {
        Grid::from(Hex::<()>::ring(1, RingOptions::default()))
    }

    fn coords(group: &[&Hex<()>]) -> HashSet<CubeCoord> {
        group.iter().map(|h| h.coord()).collect()
    }

    #[test]
    fn ring_minus_one_member_is_one_group() {
        let grid = ring_grid();
        let subset: Vec<_> = grid.iter().map(Hex::coord).filter(|c| *c != CubeCoord::new(0, 1)).collect();

        let groups = grid.groups(&subset);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 5);
    }

    #[test]
    fn split_arcs_are_two_groups() {
        let grid = ring_grid();
        // Ring walk: (0,1) (1,0) (1,-1) (0,-1) (-1,0) (-1,1); drop (0,1) and (0,-1).
        let subset = [(1, 0), (1, -1), (-1, 0), (-1, 1)];

        let groups = grid.groups(subset);
        assert_eq!(groups.len(), 2);

        let a = coords(&groups[0]);
        let b = coords(&groups[1]);
        assert!(a.is_disjoint(&b));
        let union: HashSet<_> = a.union(&b).copied().collect();
        let expected: HashSet<_> = subset.iter().map(|&c| CubeCoord::from(c)).collect();
        assert_eq!(union, expected);
    }

    #[test]
    fn cells_outside_subset_do_not_connect() {
        let mut grid = ring_grid();
        grid.insert(Hex::new(0, 0));

        // The centre links everything, but it is not part of the subset.
        let groups = grid.groups([(0, 1), (0, -1)]);
        assert_eq!(groups.len(), 2);

        let groups = grid.groups([(0, 1), (0, -1), (0, 0)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn missing_and_duplicate_members() {
        let grid = ring_grid();
        let groups = grid.groups([(1, 0), (1, 0), (7, 7)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 1);
        assert!(grid.groups(Vec::<CubeCoord>::new()).is_empty());
    }

    #[test]
    fn groups_seed_in_subset_order() {
        let grid = ring_grid();
        let groups = grid.groups([(-1, 0), (1, 0)]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0][0].coord(), CubeCoord::new(-1, 0));
        assert_eq!(groups[1][0].coord(), CubeCoord::new(1, 0));
    }
}
