//! Ring and hexagon enumeration.
//!
//! A ring of radius n around a centre holds every hex at exactly distance n
//! from it. Rings are walked in a fixed order: starting at the hex n steps
//! north of the centre, then along the six edges clockwise (south-east,
//! south, south-west, north-west, north, north-east). A hexagon is a
//! concatenation of rings.
//!
//! Hexes that would fall off the `i32` plane are skipped, so a ring near the
//! edge of the range is shorter than the sizes below.
//!
//! # Sizes
//!
//! - Ring 0: the centre only (1 hex)
//! - Ring n > 0: 6n hexes
//! - Hexagon of radius n: 1 + 3n(n+1) hexes

use crate::cube::CubeCoord;
use crate::direction::Direction;

/// Corner of each edge for a unit ring, in walk order.
const CORNERS: [(i32, i32); 6] = [(0, 1), (1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1)];

/// Direction walked along each edge, in walk order.
const EDGES: [Direction; 6] = [
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::NorthWest,
    Direction::North,
    Direction::NorthEast,
];

/// Number of hexes in ring `radius`.
#[inline]
pub const fn cells_in_ring(radius: u32) -> u64 {
    if radius == 0 {
        1
    } else {
        6 * radius as u64
    }
}

/// Number of hexes in a filled hexagon of `radius`.
///
/// Formula: 1 + 3n(n+1)
#[inline]
pub const fn cells_in_hexagon(radius: u32) -> u64 {
    let n = radius as u64;
    1 + 3 * n * (n + 1)
}

/// Order in which a hexagon's rings are concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RingOrder {
    /// Outermost ring first, centre last.
    #[default]
    Inward,
    /// Centre first, outermost ring last.
    Outward,
}

/// Whether every hex within `radius` of `center` is on the plane.
fn fits(center: CubeCoord, radius: u32) -> bool {
    let n = i64::from(radius);
    let inside = |axis: i32| {
        let axis = i64::from(axis);
        axis - n >= i64::from(i32::MIN) && axis + n <= i64::from(i32::MAX)
    };
    inside(center.q) && inside(center.r)
}

/// Iterator over one ring.
#[derive(Debug, Clone)]
pub struct Ring {
    center: CubeCoord,
    radius: u32,
    current: u64,
    fits: bool,
}

impl Ring {
    /// Ring of `radius` around `center`.
    pub fn new(center: CubeCoord, radius: u32) -> Self {
        Self {
            center,
            radius,
            current: 0,
            fits: fits(center, radius),
        }
    }

    /// Radius of this ring.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    fn coord_at(&self, index: u64) -> Option<CubeCoord> {
        if self.radius == 0 {
            return Some(self.center);
        }

        let n = u64::from(self.radius);
        let edge = (index / n) as usize;
        let pos = (index % n) as i64;
        let (cq, cr) = CORNERS[edge];
        let (dq, dr) = EDGES[edge].offset();

        let n = n as i64;
        let q = i64::from(self.center.q) + i64::from(cq) * n + i64::from(dq) * pos;
        let r = i64::from(self.center.r) + i64::from(cr) * n + i64::from(dr) * pos;
        Some(CubeCoord::new(i32::try_from(q).ok()?, i32::try_from(r).ok()?))
    }
}

impl Iterator for Ring {
    type Item = CubeCoord;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current < cells_in_ring(self.radius) {
            let coord = self.coord_at(self.current);
            self.current += 1;
            if coord.is_some() {
                return coord;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = cells_in_ring(self.radius).saturating_sub(self.current) as usize;
        if self.fits {
            (remaining, Some(remaining))
        } else {
            (0, Some(remaining))
        }
    }
}

/// Iterator over a filled hexagon, ring by ring.
#[derive(Debug, Clone)]
pub struct Hexagon {
    center: CubeCoord,
    order: RingOrder,
    radius: u32,
    /// Rings still to start after `ring`.
    pending: u32,
    ring: Ring,
    fits: bool,
}

impl Hexagon {
    /// Filled hexagon of `radius` around `center`, rings concatenated in `order`.
    pub fn new(center: CubeCoord, radius: u32, order: RingOrder) -> Self {
        let first = match order {
            RingOrder::Inward => radius,
            RingOrder::Outward => 0,
        };
        Self {
            center,
            order,
            radius,
            pending: radius,
            ring: Ring::new(center, first),
            fits: fits(center, radius),
        }
    }

    fn next_radius(&self) -> u32 {
        match self.order {
            RingOrder::Inward => self.ring.radius - 1,
            RingOrder::Outward => self.ring.radius + 1,
        }
    }
}

impl Iterator for Hexagon {
    type Item = CubeCoord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(coord) = self.ring.next() {
                return Some(coord);
            }
            if self.pending == 0 {
                return None;
            }
            self.pending -= 1;
            self.ring = Ring::new(self.center, self.next_radius());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, in_ring) = self.ring.size_hint();
        let in_ring = in_ring.unwrap_or(0);
        let later: u64 = match self.order {
            RingOrder::Inward => {
                if self.pending == 0 {
                    0
                } else {
                    cells_in_hexagon(self.ring.radius - 1)
                }
            }
            RingOrder::Outward => {
                cells_in_hexagon(self.radius) - cells_in_hexagon(self.ring.radius)
            }
        };
        let remaining = in_ring + later as usize;
        if self.fits {
            (remaining, Some(remaining))
        } else {
            (0, Some(remaining))
        }
    }
}

/// Coordinates of the ring of `radius` around `center`.
pub fn ring(center: CubeCoord, radius: u32) -> Ring {
    Ring::new(center, radius)
}

/// Coordinates of the filled hexagon of `radius` around `center`.
pub fn hexagon(center: CubeCoord, radius: u32, order: RingOrder) -> Hexagon {
    Hexagon::new(center, radius, order)
}
