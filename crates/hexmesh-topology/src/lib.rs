//! Hexmesh Topology
//!
//! Coordinate algebra for hexagonal grids.
//!
//! # Cube Coordinates
//!
//! Every hex is addressed by three axes (q, r, s) constrained by
//! q + r + s = 0. Two axes are stored, the third is derived, so every value
//! of [`CubeCoord`] satisfies the constraint. Distance between two hexes is
//! half the sum of the absolute axis differences.
//!
//! # Directions
//!
//! The six neighbours of a hex are reached through [`Direction`]s. Each
//! direction owns one bit, so subsets of directions are [`DirectionMask`]s.
//! Translating along a direction changes exactly two axes by +n/-n.
//!
//! # Rotation
//!
//! A rotation by one sixth of a turn permutes the three axes cyclically and
//! flips their signs. Left and right rotations by the same amount are exact
//! inverses for any integer amount.
//!
//! # Rings
//!
//! [`ring`] and [`hexagon`] enumerate the hexes at a fixed distance (or up to
//! a distance) from a centre in a fixed walk order.

mod cube;
mod direction;
mod error;
mod key;
mod ring;

pub use cube::{Axial, CubeCoord};
pub use direction::{Direction, DirectionMask};
pub use error::{Result, TopologyError};
pub use key::HexKey;
pub use ring::{cells_in_hexagon, cells_in_ring, hexagon, ring, Hexagon, Ring, RingOrder};

/// Number of neighbours of every hex.
pub const NEIGHBOURS_PER_HEX: usize = 6;

/// Sixths of a turn in a full rotation.
pub const ROTATION_STEPS: i32 = 6;

const _: () = assert!(Direction::ALL.len() == NEIGHBOURS_PER_HEX);
