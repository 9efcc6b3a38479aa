//! Hexmesh Grid
//!
//! A spatial index of payload-carrying hexes.
//!
//! # Storage
//!
//! A [`Grid`] maps each hex's canonical key to the [`Hex`] stored there.
//! Inserting at an occupied key replaces the old cell ("last write wins").
//! Lookups, removals and merges are keyed by (q, r) only.
//!
//! # Out-of-band moves
//!
//! Lookups hand out references. A caller that moves a cell through a mutable
//! reference leaves the index stale: the cell is still filed under its old
//! key. [`Grid::recalibrate`] rebuilds the index; bulk rotations call it
//! themselves.
//!
//! # Queries
//!
//! - [`Grid::neighbours`]: adjacent cells selected by a direction mask
//! - [`Grid::path`] / [`Grid::distance`]: shortest hop path through stored
//!   cells, missing hexes being obstacles
//! - [`Grid::groups`]: connected components of a subset of cells
//!
//! # Generators
//!
//! [`Hex::ring`] and [`Hex::hexagon`] build rings and filled hexagons of
//! cells, seeding payloads positionally; [`hex_factory`] closes over a
//! default payload.
//!
//! # Usage
//!
//! ```
//! use hexmesh_grid::{Grid, Hex, HexagonOptions, RingOptions};
//!
//! let mut grid: Grid<&str> = Hex::hexagon(1, HexagonOptions::default()).into_iter().collect();
//! grid.insert_all(Hex::ring(1, RingOptions::default().center((10, 0)).default_data("far")));
//!
//! assert_eq!(grid.len(), 13);
//! assert_eq!(grid.distance((1, 0), (-1, 0)), Some(2));
//! assert_eq!(grid.distance((0, 0), (10, 1)), None);
//! ```

mod cell;
mod error;
mod generate;
mod grid;
mod groups;
mod search;
#[cfg(feature = "serde")]
mod snapshot;

pub use cell::{hex_factory, Hex};
pub use error::{GridError, Result};
pub use generate::{HexagonOptions, RingOptions};
pub use grid::Grid;

pub use hexmesh_topology::{
    Axial, CubeCoord, Direction, DirectionMask, HexKey, RingOrder, TopologyError,
};
