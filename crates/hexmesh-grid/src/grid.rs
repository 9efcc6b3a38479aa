//! Grid storage, neighbour queries and bulk transforms.

use std::collections::HashMap;

use hexmesh_topology::{Axial, CubeCoord, Direction, DirectionMask, HexKey};
use tracing::{debug, trace, warn};

use crate::cell::Hex;
use crate::error::Result;

/// A hexagonal grid: cells indexed by their canonical key.
///
/// Every stored key equals the key of its cell's current coordinate, except
/// after a caller moves a cell through a mutable reference (`get_mut`,
/// `lookup_mut`, `iter_mut`). Such moves are not detected; lookups stay stale
/// until [`recalibrate`](Self::recalibrate) rebuilds the index.
///
/// ```
/// use hexmesh_grid::{Grid, Hex};
///
/// let mut grid = Grid::from(vec![Hex::new(-2, 0), Hex::with_data(1, 1, "ola")]);
///
/// grid.get_mut((1, 1)).unwrap().r = 2;
/// grid.recalibrate();
///
/// assert!(grid.get((1, 1)).is_none());
/// assert_eq!(grid.get((1, 2)).unwrap().data, Some("ola"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    pub(crate) cells: HashMap<HexKey, Hex<T>>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Grid<T> {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Create an empty grid with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashMap::with_capacity(capacity),
        }
    }

    // ── Storage ─────────────────────────────────────────────────

    /// Store a cell, replacing and returning any cell at the same key.
    pub fn insert(&mut self, hex: Hex<T>) -> Option<Hex<T>> {
        self.cells.insert(hex.key(), hex)
    }

    /// Store cells in order; later cells win over earlier ones at the same key.
    ///
    /// Returns the number of cells that replaced an existing entry.
    pub fn insert_all<I>(&mut self, hexes: I) -> usize
    where
        I: IntoIterator<Item = Hex<T>>,
    {
        let hexes = hexes.into_iter();
        self.cells.reserve(hexes.size_hint().0);

        let mut replaced = 0;
        for hex in hexes {
            if self.insert(hex).is_some() {
                replaced += 1;
            }
        }
        trace!(replaced, size = self.cells.len(), "bulk insert");
        replaced
    }

    /// Cell at `coord`.
    pub fn get(&self, coord: impl Axial) -> Option<&Hex<T>> {
        self.cells.get(&HexKey::of(&coord))
    }

    /// Mutable cell at `coord`.
    ///
    /// Moving the returned cell leaves the index stale until
    /// [`recalibrate`](Self::recalibrate).
    pub fn get_mut(&mut self, coord: impl Axial) -> Option<&mut Hex<T>> {
        self.cells.get_mut(&HexKey::of(&coord))
    }

    /// Cell at a `"{q}x{r}"` key. Text that does not parse addresses no cell.
    pub fn lookup(&self, key: &str) -> Option<&Hex<T>> {
        let key: HexKey = key.parse().ok()?;
        self.cells.get(&key)
    }

    /// Mutable cell at a `"{q}x{r}"` key.
    pub fn lookup_mut(&mut self, key: &str) -> Option<&mut Hex<T>> {
        let key: HexKey = key.parse().ok()?;
        self.cells.get_mut(&key)
    }

    /// Whether a cell is stored at `coord`.
    pub fn contains(&self, coord: impl Axial) -> bool {
        self.cells.contains_key(&HexKey::of(&coord))
    }

    /// Delete the cell at `coord`. Returns whether one existed.
    pub fn remove(&mut self, coord: impl Axial) -> bool {
        self.take(coord).is_some()
    }

    /// Delete and return the cell at `coord`.
    pub fn take(&mut self, coord: impl Axial) -> Option<Hex<T>> {
        self.cells.remove(&HexKey::of(&coord))
    }

    /// Merge other grids into this one.
    ///
    /// Same as concatenating this grid's cells with each other grid's cells,
    /// in argument order, and re-inserting them all: later grids win.
    pub fn merge<I>(&mut self, others: I) -> &mut Self
    where
        I: IntoIterator<Item = Grid<T>>,
    {
        let own: Vec<Hex<T>> = self.cells.drain().map(|(_, hex)| hex).collect();
        let incoming = others.into_iter().flatten();
        self.insert_all(own.into_iter().chain(incoming));
        debug!(size = self.cells.len(), "merged grids");
        self
    }

    /// Rebuild the index from the cells' current coordinates.
    ///
    /// Call after moving cells through mutable references. Cells that now
    /// share a coordinate collapse to one; which survives is unspecified.
    /// Returns the number of cells dropped that way.
    pub fn recalibrate(&mut self) -> usize {
        let before = self.cells.len();
        let stale = std::mem::replace(&mut self.cells, HashMap::with_capacity(before));
        for (_, hex) in stale {
            self.cells.insert(hex.key(), hex);
        }

        let dropped = before - self.cells.len();
        if dropped > 0 {
            warn!(dropped, size = self.cells.len(), "recalibration collapsed colliding cells");
        } else {
            trace!(size = before, "recalibrated");
        }
        dropped
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remove every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate over stored cells.
    pub fn iter(&self) -> impl Iterator<Item = &Hex<T>> {
        self.cells.values()
    }

    /// Iterate mutably over stored cells.
    ///
    /// Moving cells leaves the index stale until [`recalibrate`](Self::recalibrate).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Hex<T>> {
        self.cells.values_mut()
    }

    /// Iterate over stored keys.
    pub fn keys(&self) -> impl Iterator<Item = &HexKey> {
        self.cells.keys()
    }

    /// All cells as a list, in the map's iteration order.
    pub fn export(&self) -> Vec<&Hex<T>> {
        self.cells.values().collect()
    }

    /// Consume the grid into its cells.
    pub fn into_vec(self) -> Vec<Hex<T>> {
        self.cells.into_values().collect()
    }

    // ── Neighbours ──────────────────────────────────────────────

    /// Cell one step from `coord` in `direction`.
    pub fn neighbour(&self, coord: impl Axial, direction: Direction) -> Option<&Hex<T>> {
        self.get(coord.cube().checked_neighbour(direction)?)
    }

    /// Stored cells adjacent to `coord` along the directions in `mask`.
    ///
    /// Results follow canonical direction order; missing cells, and steps
    /// off the edge of the plane, are skipped.
    pub fn neighbours(&self, coord: impl Axial, mask: DirectionMask) -> Vec<&Hex<T>> {
        let center = coord.cube();
        mask.directions()
            .filter_map(|d| center.checked_neighbour(d))
            .filter_map(|c| self.get(c))
            .collect()
    }

    /// Stored cells adjacent to `coord` in any direction.
    pub fn neighbours_all(&self, coord: impl Axial) -> Vec<&Hex<T>> {
        self.neighbours(coord, DirectionMask::ALL)
    }

    /// [`neighbour`](Self::neighbour) taking a raw direction bit.
    ///
    /// Fails if `bits` is not exactly one of the six direction bits.
    pub fn neighbour_raw(&self, coord: impl Axial, bits: u8) -> Result<Option<&Hex<T>>> {
        let direction = Direction::try_from(bits)?;
        Ok(self.neighbour(coord, direction))
    }

    /// [`neighbours`](Self::neighbours) taking a raw direction mask.
    ///
    /// Fails if `bits` has anything set outside the six direction bits.
    pub fn neighbours_raw(&self, coord: impl Axial, bits: u8) -> Result<Vec<&Hex<T>>> {
        let mask = DirectionMask::try_from_bits(bits)?;
        Ok(self.neighbours(coord, mask))
    }

    // ── Transforms ──────────────────────────────────────────────

    /// Rotate every cell `times` sixths of a turn left around the origin.
    pub fn rotate_left(&mut self, times: i32) -> &mut Self {
        self.rotate_left_about(times, CubeCoord::ORIGIN)
    }

    /// Rotate every cell `times` sixths of a turn right around the origin.
    pub fn rotate_right(&mut self, times: i32) -> &mut Self {
        self.rotate_right_about(times, CubeCoord::ORIGIN)
    }

    /// Rotate every cell `times` sixths of a turn left around `center`.
    pub fn rotate_left_about(&mut self, times: i32, center: impl Into<CubeCoord>) -> &mut Self {
        let center = center.into();
        for hex in self.cells.values_mut() {
            hex.rotate_left_about(times, center);
        }
        debug!(times, %center, "rotated grid left");
        self.recalibrate();
        self
    }

    /// Rotate every cell `times` sixths of a turn right around `center`.
    pub fn rotate_right_about(&mut self, times: i32, center: impl Into<CubeCoord>) -> &mut Self {
        let center = center.into();
        for hex in self.cells.values_mut() {
            hex.rotate_right_about(times, center);
        }
        debug!(times, %center, "rotated grid right");
        self.recalibrate();
        self
    }
}

impl<T> FromIterator<Hex<T>> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = Hex<T>>>(iter: I) -> Self {
        let mut grid = Self::new();
        grid.insert_all(iter);
        grid
    }
}

impl<T> Extend<Hex<T>> for Grid<T> {
    fn extend<I: IntoIterator<Item = Hex<T>>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T> From<Vec<Hex<T>>> for Grid<T> {
    fn from(hexes: Vec<Hex<T>>) -> Self {
        hexes.into_iter().collect()
    }
}

impl<T> IntoIterator for Grid<T> {
    type Item = Hex<T>;
    type IntoIter = std::collections::hash_map::IntoValues<HexKey, Hex<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_values()
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a Hex<T>;
    type IntoIter = std::collections::hash_map::Values<'a, HexKey, Hex<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridError, HexagonOptions, RingOptions};
    use hexmesh_topology::TopologyError;

    fn hexagon<T: Clone>(radius: u32) -> Grid<T> {
        Hex::hexagon(radius, HexagonOptions::default()).into_iter().collect()
    }

    #[test]
    fn get_individual_hexes() {
        let grid = Grid::from(vec![Hex::with_data(2, -1, "Hello"), Hex::with_data(2, 0, "World")]);

        assert!(grid.get((2, 1)).is_none());
        assert_eq!(grid.get((2, 0)).unwrap().data, Some("World"));
        assert_eq!(grid.get((2, -1)).unwrap().data, Some("Hello"));
    }

    #[test]
    fn overwrite_at_same_position_keeps_size_consistent() {
        let mut grid: Grid<&str> = Grid::new();
        assert_eq!(grid.len(), 0);

        grid.insert_all([Hex::new(0, 2), Hex::with_data(4, -2, "Hi")]);
        assert_eq!(grid.len(), 2);

        grid.insert_all([Hex::new(1, 2), Hex::with_data(4, -2, "Boy")]);
        assert_eq!(grid.len(), 3);

        assert_eq!(grid.get((4, -2)).unwrap().data, Some("Boy"));
    }

    #[test]
    fn later_arguments_win_within_one_insert() {
        let mut grid = Grid::new();
        let replaced = grid.insert_all([Hex::with_data(0, 0, 1), Hex::with_data(0, 0, 2)]);
        assert_eq!(replaced, 1);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get((0, 0)).unwrap().data, Some(2));
    }

    #[test]
    fn remove_hexes() {
        let mut grid = Grid::from(Hex::<()>::ring(2, RingOptions::default()));
        assert_eq!(grid.len(), 12);

        assert!(grid.remove((-2, 0)));
        assert!(!grid.remove((-2, 0)));
        assert_eq!(grid.len(), 11);

        grid.insert(Hex::new(-2, 0));
        assert_eq!(grid.len(), 12);
    }

    #[test]
    fn lookup_by_text_key() {
        let grid = Grid::from(vec![Hex::with_data(-1, -2, 'a')]);
        assert_eq!(grid.lookup("-1x-2").and_then(Hex::data), Some(&'a'));
        assert!(grid.lookup("-2x-1").is_none());
        assert!(grid.lookup("garbage").is_none());
    }

    #[test]
    fn rotate_fully() {
        let mut grid: Grid<&str> = hexagon(1);
        assert_eq!(grid.len(), 7);

        grid.remove((1, 0));
        grid.lookup_mut("0x1").unwrap().data = Some("Single data");
        assert_eq!(grid.len(), 6);

        grid.rotate_left(3);
        assert!(grid.lookup("-1x0").is_none());
        assert_eq!(grid.lookup("0x-1").unwrap().data, Some("Single data"));
        assert_eq!(grid.len(), 6);

        grid.insert(Hex::with_data(0, -1, "newer"));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.lookup("0x-1").unwrap().data, Some("newer"));
    }

    #[test]
    fn rotate_left_and_right_cancel() {
        let original = Grid::from(Hex::hexagon(2, HexagonOptions::default().data(0..19usize)));

        for k in [-7, -1, 1, 4, 13] {
            let mut grid = original.clone();
            grid.rotate_left_about(k, (3, -1)).rotate_right_about(k, (3, -1));
            assert_eq!(grid, original, "k = {k}");
        }
    }

    #[test]
    fn recalibrate_after_external_move() {
        let mut grid = Grid::from(vec![Hex::new(-2, 0), Hex::with_data(1, 1, "ola")]);

        grid.lookup_mut("1x1").unwrap().r = 2;
        assert!(grid.lookup("1x2").is_none(), "index is stale before recalibrate");

        assert_eq!(grid.recalibrate(), 0);
        assert!(grid.lookup("1x1").is_none());
        assert_eq!(grid.lookup("1x2").unwrap().data, Some("ola"));
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn recalibrate_counts_collisions() {
        let mut grid: Grid<()> = hexagon(1);
        grid.get_mut((1, 0)).unwrap().set_coord((0, 0));
        grid.get_mut((0, 1)).unwrap().set_coord((0, 0));

        assert_eq!(grid.recalibrate(), 2);
        assert_eq!(grid.len(), 5);
    }

    #[test]
    fn find_neighbours() {
        let grid = Grid::from(Hex::<()>::ring(1, RingOptions::default()));

        assert_eq!(grid.neighbours_all((0, 0)).len(), 6);
        assert_eq!(grid.neighbours_all((1, 0)).len(), 2);
    }

    #[test]
    fn neighbours_follow_direction_order_and_mask() {
        let grid: Grid<()> = hexagon(1);

        let all: Vec<_> = grid.neighbours_all((0, 0)).into_iter().map(Hex::coord).collect();
        assert_eq!(all, CubeCoord::ORIGIN.neighbours().to_vec());

        let mask = DirectionMask::NORTH | DirectionMask::SOUTH;
        let some: Vec<_> = grid.neighbours((0, 0), mask).into_iter().map(Hex::coord).collect();
        assert_eq!(some, vec![CubeCoord::new(0, 1), CubeCoord::new(0, -1)]);

        assert_eq!(
            grid.neighbour((1, 0), Direction::SouthWest).map(Hex::coord),
            Some(CubeCoord::ORIGIN)
        );
        assert!(grid.neighbour((1, 0), Direction::NorthEast).is_none());
    }

    #[test]
    fn raw_direction_inputs_are_validated() {
        let grid: Grid<()> = hexagon(1);

        let north = grid.neighbour_raw((0, 0), Direction::North.bit()).unwrap();
        assert_eq!(north.map(Hex::coord), Some(CubeCoord::new(0, 1)));
        assert_eq!(
            grid.neighbour_raw((0, 0), 3),
            Err(GridError::Topology(TopologyError::InvalidDirection(3)))
        );

        assert_eq!(grid.neighbours_raw((1, 0), 0b11_1111).unwrap().len(), 3);
        assert!(grid.neighbours_raw((1, 0), 0).unwrap().is_empty());
        assert_eq!(
            grid.neighbours_raw((1, 0), 0x80),
            Err(GridError::Topology(TopologyError::InvalidDirectionMask(0x80)))
        );
    }

    #[test]
    fn merge_later_grids_win() {
        let mut base = Grid::from(vec![Hex::with_data(0, 0, "base"), Hex::with_data(5, 5, "only")]);
        let first = Grid::from(vec![Hex::with_data(0, 0, "first"), Hex::with_data(1, 0, "first")]);
        let second = Grid::from(vec![Hex::with_data(1, 0, "second")]);

        base.merge([first, second]);

        assert_eq!(base.len(), 3);
        assert_eq!(base.get((0, 0)).unwrap().data, Some("first"));
        assert_eq!(base.get((1, 0)).unwrap().data, Some("second"));
        assert_eq!(base.get((5, 5)).unwrap().data, Some("only"));
    }

    #[test]
    fn export_lists_every_cell_once() {
        let grid: Grid<u8> = hexagon(2);
        let mut keys: Vec<_> = grid.export().into_iter().map(Hex::key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 19);
        assert_eq!(grid.into_vec().len(), 19);
    }
}
