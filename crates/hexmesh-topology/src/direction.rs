//! The six hexagonal directions and direction masks.
//!
//! Each direction carries a distinct power-of-two bit so that any subset of
//! directions fits in a [`DirectionMask`]. The canonical order of
//! [`Direction::ALL`] is the order every neighbour query walks in.

use bitflags::bitflags;

use crate::error::{Result, TopologyError};

/// One of the six hex directions (flat-topped, north up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    North = 1,
    NorthEast = 2,
    SouthEast = 4,
    South = 8,
    SouthWest = 16,
    NorthWest = 32,
}

impl Direction {
    /// All six directions in canonical order.
    pub const ALL: [Self; 6] = [
        Self::North,
        Self::NorthEast,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// The bit assigned to this direction.
    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Position of this direction in [`Direction::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        (self as u8).trailing_zeros() as usize
    }

    /// Direction at `index` (taken modulo 6) in canonical order.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 6]
    }

    /// The direction pointing the other way (three steps along the order).
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Axial `(dq, dr)` offset of a single step in this direction.
    ///
    /// The third axis absorbs the change so that `q + r + s` stays zero.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::NorthEast => (1, 0),
            Self::SouthEast => (1, -1),
            Self::South => (0, -1),
            Self::SouthWest => (-1, 0),
            Self::NorthWest => (-1, 1),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = TopologyError;

    fn try_from(bits: u8) -> Result<Self> {
        match bits {
            1 => Ok(Self::North),
            2 => Ok(Self::NorthEast),
            4 => Ok(Self::SouthEast),
            8 => Ok(Self::South),
            16 => Ok(Self::SouthWest),
            32 => Ok(Self::NorthWest),
            other => Err(TopologyError::InvalidDirection(other)),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.bit()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::NorthEast => "north-east",
            Self::SouthEast => "south-east",
            Self::South => "south",
            Self::SouthWest => "south-west",
            Self::NorthWest => "north-west",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// A set of directions, used to select which axes a neighbour query walks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DirectionMask: u8 {
        const NORTH = Direction::North as u8;
        const NORTH_EAST = Direction::NorthEast as u8;
        const SOUTH_EAST = Direction::SouthEast as u8;
        const SOUTH = Direction::South as u8;
        const SOUTH_WEST = Direction::SouthWest as u8;
        const NORTH_WEST = Direction::NorthWest as u8;
    }
}

impl DirectionMask {
    /// Every direction.
    pub const ALL: Self = Self::all();

    /// Build a mask from raw bits, rejecting anything outside the six flags.
    pub fn try_from_bits(bits: u8) -> Result<Self> {
        Self::from_bits(bits).ok_or(TopologyError::InvalidDirectionMask(bits))
    }

    /// Whether `direction` is selected.
    #[inline]
    pub fn contains_direction(self, direction: Direction) -> bool {
        self.bits() & direction.bit() != 0
    }

    /// The selected directions, in canonical order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |d| self.contains_direction(*d))
    }
}

impl Default for DirectionMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<Direction> for DirectionMask {
    fn from(direction: Direction) -> Self {
        Self::from_bits_retain(direction.bit())
    }
}

impl FromIterator<Direction> for DirectionMask {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |mask, d| mask | Self::from(d))
    }
}
