//! Packed canonical keys.
//!
//! A [`HexKey`] identifies a hex by its (q, r) pair packed into a single
//! `u64`: q in the high 32 bits, r in the low 32 bits. It hashes and compares
//! as one integer, and its text form matches [`CubeCoord`]'s `"{q}x{r}"`.

use std::fmt;
use std::str::FromStr;

use crate::cube::{parse_pair, Axial, CubeCoord};
use crate::error::{Result, TopologyError};

/// Canonical index key of a hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexKey(u64);

impl HexKey {
    /// Pack a (q, r) pair.
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self(((q as u32 as u64) << 32) | (r as u32 as u64))
    }

    /// Key of any axial position.
    #[inline]
    pub fn of<A: Axial + ?Sized>(pos: &A) -> Self {
        Self::new(pos.q(), pos.r())
    }

    /// The raw packed value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The coordinate this key addresses.
    #[inline]
    pub const fn coord(&self) -> CubeCoord {
        CubeCoord::new((self.0 >> 32) as u32 as i32, self.0 as u32 as i32)
    }
}

impl Axial for HexKey {
    #[inline]
    fn q(&self) -> i32 {
        (self.0 >> 32) as u32 as i32
    }

    #[inline]
    fn r(&self) -> i32 {
        self.0 as u32 as i32
    }
}

impl From<CubeCoord> for HexKey {
    fn from(c: CubeCoord) -> Self {
        Self::new(c.q, c.r)
    }
}

impl From<HexKey> for CubeCoord {
    fn from(key: HexKey) -> Self {
        key.coord()
    }
}

impl fmt::Display for HexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coord(), f)
    }
}

impl FromStr for HexKey {
    type Err = TopologyError;

    fn from_str(input: &str) -> Result<Self> {
        let (q, r) = parse_pair(input)?;
        Ok(Self::new(q, r))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
