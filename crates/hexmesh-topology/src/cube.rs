//! Cube coordinates over a hexagonal plane.
//!
//! A hex is addressed by three axes (q, r, s) with q + r + s = 0. Only q and
//! r are stored; s is derived on demand, so the invariant cannot drift. The
//! text form is `"{q}x{r}"`.
//!
//! q and r span the full `i32` range. s can leave that range (`-(i32::MIN)`),
//! so it is an `i64`, and distances are `u64`. Steps that would leave the
//! plane are `None` through [`CubeCoord::checked_translate`].

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::direction::Direction;
use crate::error::{Result, TopologyError};

/// Anything positioned on the hex plane by a (q, r) pair.
///
/// Grid queries accept any `Axial` value, so coordinates, keys and stored
/// cells can all be used to address a hex.
pub trait Axial {
    /// First axial coordinate.
    fn q(&self) -> i32;

    /// Second axial coordinate.
    fn r(&self) -> i32;

    /// Derived third axis.
    #[inline]
    fn s(&self) -> i64 {
        -i64::from(self.q()) - i64::from(self.r())
    }

    /// The position as a plain coordinate.
    #[inline]
    fn cube(&self) -> CubeCoord {
        CubeCoord::new(self.q(), self.r())
    }
}

impl<A: Axial + ?Sized> Axial for &A {
    fn q(&self) -> i32 {
        (**self).q()
    }

    fn r(&self) -> i32 {
        (**self).r()
    }
}

/// A position on the hex plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeCoord {
    /// First axial coordinate
    pub q: i32,
    /// Second axial coordinate
    pub r: i32,
}

/// Left-rotation table indexed by the number of 60 degree steps.
///
/// Each entry maps (q, r, s) to the rotated (q, r); s follows. Arithmetic
/// wraps modulo 2^32 on every axis.
const ROTATIONS: [fn(i32, i32, i32) -> (i32, i32); 6] = [
    |q, r, _| (q, r),
    |_, r, s| (r.wrapping_neg(), s.wrapping_neg()),
    |q, _, s| (s, q),
    |q, r, _| (q.wrapping_neg(), r.wrapping_neg()),
    |_, r, s| (r, s),
    |q, _, s| (s.wrapping_neg(), q.wrapping_neg()),
];

impl CubeCoord {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Create a coordinate; s is derived.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third axis: s = -q - r.
    pub const fn s(&self) -> i64 {
        -(self.q as i64) - (self.r as i64)
    }

    /// Shift `n` steps along `direction`. Negative `n` walks backwards.
    ///
    /// Overflows if the result leaves the `i32` plane; see
    /// [`checked_translate`](Self::checked_translate).
    pub const fn translate(self, direction: Direction, n: i32) -> Self {
        let (dq, dr) = direction.offset();
        Self {
            q: self.q + dq * n,
            r: self.r + dr * n,
        }
    }

    /// [`translate`](Self::translate) with a raw direction bit.
    ///
    /// Fails with [`TopologyError::InvalidDirection`] if `bits` is not one of
    /// the six direction values.
    pub fn translate_raw(self, bits: u8, n: i32) -> Result<Self> {
        let direction = Direction::try_from(bits)?;
        Ok(self.translate(direction, n))
    }

    /// `translate`, or `None` if the result falls off the `i32` plane.
    pub fn checked_translate(self, direction: Direction, n: i32) -> Option<Self> {
        let (dq, dr) = direction.offset();
        let q = self.q.checked_add(dq.checked_mul(n)?)?;
        let r = self.r.checked_add(dr.checked_mul(n)?)?;
        Some(Self::new(q, r))
    }

    /// The adjacent hex in `direction`.
    #[inline]
    pub const fn neighbour(self, direction: Direction) -> Self {
        self.translate(direction, 1)
    }

    /// The adjacent hex in `direction`, if it is on the plane.
    #[inline]
    pub fn checked_neighbour(self, direction: Direction) -> Option<Self> {
        self.checked_translate(direction, 1)
    }

    /// All six adjacent hexes in canonical direction order.
    pub fn neighbours(self) -> [Self; 6] {
        Direction::ALL.map(|d| self.neighbour(d))
    }

    /// Adjacent hexes that exist on the plane, in canonical direction order.
    ///
    /// Same as [`neighbours`](Self::neighbours) away from the edge of the
    /// `i32` range.
    pub fn adjacent(self) -> impl Iterator<Item = Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.checked_neighbour(d))
    }

    /// Hex distance: half the sum of the absolute axis deltas.
    pub fn distance(&self, other: &Self) -> u64 {
        let dq = (i64::from(self.q) - i64::from(other.q)).unsigned_abs();
        let dr = (i64::from(self.r) - i64::from(other.r)).unsigned_abs();
        let ds = (self.s() - other.s()).unsigned_abs();
        (dq + dr + ds) / 2
    }

    /// Ring number around the origin.
    pub fn ring(&self) -> u64 {
        self.distance(&Self::ORIGIN)
    }

    /// Rotate `times` sixths of a turn to the left around `center`.
    ///
    /// `times` is reduced with a floor modulo, so negative values rotate the
    /// other way. Images that leave the `i32` plane wrap around it; left and
    /// right rotations stay exact inverses.
    pub fn rotate_left(self, times: i32, center: Self) -> Self {
        let q = self.q.wrapping_sub(center.q);
        let r = self.r.wrapping_sub(center.r);
        let s = q.wrapping_neg().wrapping_sub(r);
        let (q, r) = ROTATIONS[times.rem_euclid(6) as usize](q, r, s);
        Self::new(q.wrapping_add(center.q), r.wrapping_add(center.r))
    }

    /// Rotate `times` sixths of a turn to the right around `center`.
    ///
    /// Exact inverse of [`rotate_left`](Self::rotate_left).
    pub fn rotate_right(self, times: i32, center: Self) -> Self {
        // -i32::MIN overflows, reduce first
        self.rotate_left(-times.rem_euclid(6), center)
    }
}

impl Axial for CubeCoord {
    #[inline]
    fn q(&self) -> i32 {
        self.q
    }

    #[inline]
    fn r(&self) -> i32 {
        self.r
    }
}

impl Axial for (i32, i32) {
    #[inline]
    fn q(&self) -> i32 {
        self.0
    }

    #[inline]
    fn r(&self) -> i32 {
        self.1
    }
}

impl From<(i32, i32)> for CubeCoord {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

impl From<CubeCoord> for (i32, i32) {
    fn from(c: CubeCoord) -> Self {
        (c.q, c.r)
    }
}

impl Add for CubeCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.q + other.q, self.r + other.r)
    }
}

impl Sub for CubeCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.q - other.q, self.r - other.r)
    }
}

impl Neg for CubeCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.q, -self.r)
    }
}

impl fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.q, self.r)
    }
}

impl FromStr for CubeCoord {
    type Err = TopologyError;

    fn from_str(input: &str) -> Result<Self> {
        let (q, r) = parse_pair(input)?;
        Ok(Self::new(q, r))
    }
}

/// Parse `"{q}x{r}"` into its two components.
pub(crate) fn parse_pair(input: &str) -> Result<(i32, i32)> {
    let err = |reason| TopologyError::ParseCoord {
        input: input.to_string(),
        reason,
    };

    let (q, r) = input.trim().split_once('x').ok_or_else(|| err("missing 'x' separator"))?;
    let q = q.trim().parse().map_err(|_| err("q is not an integer"))?;
    let r = r.trim().parse().map_err(|_| err("r is not an integer"))?;
    Ok((q, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn s_axis_constraint() {
        for c in [
            CubeCoord::ORIGIN,
            CubeCoord::new(1, 0),
            CubeCoord::new(1, -1),
            CubeCoord::new(-3, 5),
        ] {
            assert_eq!(i64::from(c.q) + i64::from(c.r) + c.s(), 0);
        }
    }

    #[test]
    fn distance_reference_values() {
        let a = CubeCoord::new(0, 0);
        let b = CubeCoord::new(0, 1);
        let c = CubeCoord::new(1, -1);

        assert_eq!(a.distance(&b), 1);
        assert_eq!(a.distance(&c), 1);
        assert_eq!(b.distance(&c), 2);
    }

    #[test]
    fn translate_mappings() {
        let o = CubeCoord::ORIGIN;
        assert_eq!(o.translate(Direction::North, 2), CubeCoord::new(0, 2));
        assert_eq!(o.translate(Direction::NorthEast, 2), CubeCoord::new(2, 0));
        assert_eq!(o.translate(Direction::SouthEast, 2), CubeCoord::new(2, -2));
        assert_eq!(o.translate(Direction::South, 2), CubeCoord::new(0, -2));
        assert_eq!(o.translate(Direction::SouthWest, 2), CubeCoord::new(-2, 0));
        assert_eq!(o.translate(Direction::NorthWest, 2), CubeCoord::new(-2, 2));
    }

    #[test]
    fn translate_raw_rejects_bad_direction() {
        let o = CubeCoord::ORIGIN;
        assert_eq!(o.translate_raw(2, 1), Ok(CubeCoord::new(1, 0)));
        assert_eq!(o.translate_raw(7, 1), Err(TopologyError::InvalidDirection(7)));
    }

    #[test]
    fn neighbours_are_at_distance_one() {
        let c = CubeCoord::new(4, -7);
        let ns = c.neighbours();
        for n in ns {
            assert_eq!(c.distance(&n), 1);
        }
        for i in 0..ns.len() {
            for j in (i + 1)..ns.len() {
                assert_ne!(ns[i], ns[j]);
            }
        }
    }

    #[test]
    fn rotate_left_about_origin() {
        let c = CubeCoord::new(-3, 2);
        let turned = c.rotate_left(2, CubeCoord::ORIGIN);
        assert_eq!(turned, CubeCoord::new(1, -3));
        assert_eq!(turned.rotate_left(4, CubeCoord::ORIGIN), c);
    }

    #[test]
    fn rotate_left_about_center() {
        let c = CubeCoord::new(-3, 2);
        let c = c.rotate_left(3, CubeCoord::new(-3, 2));
        assert_eq!(c, CubeCoord::new(-3, 2));
        let c = c.rotate_left(1, CubeCoord::new(-2, 1));
        assert_eq!(c, CubeCoord::new(-3, 1));
    }

    #[test]
    fn rotation_extremes_do_not_overflow() {
        let c = CubeCoord::new(2, -1);
        assert_eq!(c.rotate_right(i32::MIN, CubeCoord::ORIGIN), c.rotate_left(2, CubeCoord::ORIGIN));
        assert_eq!(c.rotate_left(i32::MAX, CubeCoord::ORIGIN), c.rotate_left(1, CubeCoord::ORIGIN));
    }

    #[test]
    fn plane_edge_arithmetic() {
        let far = CubeCoord::new(i32::MAX, -i32::MAX);
        let other = CubeCoord::new(-i32::MAX, i32::MAX);
        assert_eq!(far.distance(&other), 2 * i32::MAX as u64);

        let low = CubeCoord::new(i32::MIN, 0);
        assert_eq!(low.s(), 1i64 << 31);
        assert_eq!(low.distance(&CubeCoord::new(i32::MAX, 0)), u32::MAX as u64);
        assert_eq!(CubeCoord::new(i32::MIN, i32::MIN).ring(), 1u64 << 32);
    }

    #[test]
    fn checked_steps_stop_at_the_edge() {
        let edge = CubeCoord::new(i32::MAX, 0);
        assert_eq!(edge.checked_neighbour(Direction::NorthEast), None);
        assert_eq!(edge.checked_neighbour(Direction::SouthEast), None);
        assert_eq!(
            edge.checked_neighbour(Direction::SouthWest),
            Some(CubeCoord::new(i32::MAX - 1, 0))
        );
        assert_eq!(CubeCoord::ORIGIN.checked_translate(Direction::SouthWest, i32::MIN), None);
        assert_eq!(
            CubeCoord::ORIGIN.checked_translate(Direction::North, i32::MIN),
            Some(CubeCoord::new(0, i32::MIN))
        );

        let on_plane: Vec<_> = edge.adjacent().collect();
        assert_eq!(
            on_plane,
            vec![
                CubeCoord::new(i32::MAX, 1),
                CubeCoord::new(i32::MAX, -1),
                CubeCoord::new(i32::MAX - 1, 0),
                CubeCoord::new(i32::MAX - 1, 1),
            ]
        );
        assert_eq!(CubeCoord::new(3, -3).adjacent().count(), 6);
    }

    #[test]
    fn rotation_at_the_edge_round_trips() {
        let c = CubeCoord::new(i32::MIN, i32::MAX);
        let center = CubeCoord::new(i32::MAX, -5);
        for k in 0..6 {
            assert_eq!(c.rotate_left(k, center).rotate_right(k, center), c);
        }
    }

    #[test]
    fn display_and_parse() {
        let c = CubeCoord::new(-12, 7);
        assert_eq!(c.to_string(), "-12x7");
        assert_eq!("-12x7".parse::<CubeCoord>(), Ok(c));
        assert_eq!(" -1 x -2 ".parse::<CubeCoord>(), Ok(CubeCoord::new(-1, -2)));
    }

    #[test]
    fn parse_failures() {
        for bad in ["", "12", "1x", "x1", "1y2", "1x2x3", "axb"] {
            assert!(
                matches!(bad.parse::<CubeCoord>(), Err(TopologyError::ParseCoord { .. })),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn addition_subtraction() {
        let a = CubeCoord::new(1, 2);
        let b = CubeCoord::new(4, -1);

        assert_eq!(a + b, CubeCoord::new(5, 1));
        assert_eq!(a - b, CubeCoord::new(-3, 3));
        assert_eq!(a + (-b), a - b);
    }

    fn coord() -> impl Strategy<Value = CubeCoord> {
        (-1000i32..1000, -1000i32..1000).prop_map(|(q, r)| CubeCoord::new(q, r))
    }

    fn direction() -> impl Strategy<Value = Direction> {
        (0usize..6).prop_map(Direction::from_index)
    }

    proptest! {
        #[test]
        fn six_steps_return_home(c in coord(), d in direction()) {
            let mut walked = c;
            for _ in 0..6 {
                walked = walked.translate(d, 1);
            }
            prop_assert_eq!(walked.translate(d, -6), c);
            prop_assert_eq!(c.translate(d, 1).translate(d.opposite(), 1), c);
        }

        #[test]
        fn distance_is_metric(a in coord(), b in coord(), c in coord()) {
            prop_assert_eq!(a.distance(&a), 0);
            prop_assert_eq!(a.distance(&b), b.distance(&a));
            prop_assert!(a.distance(&c) <= a.distance(&b) + b.distance(&c));
        }

        #[test]
        fn rotation_left_then_right_is_identity(
            c in coord(),
            center in coord(),
            k in any::<i32>(),
        ) {
            prop_assert_eq!(c.rotate_left(k, center).rotate_right(k, center), c);
            prop_assert_eq!(c.rotate_right(k, center).rotate_left(k, center), c);
        }

        #[test]
        fn six_rotations_are_identity(c in coord(), center in coord()) {
            prop_assert_eq!(c.rotate_left(6, center), c);
            prop_assert_eq!(c.rotate_right(6, CubeCoord::ORIGIN), c);
            prop_assert_eq!(c.rotate_left(1, center).distance(&center), c.distance(&center));
        }

        #[test]
        fn text_form_parses_back(c in coord()) {
            prop_assert_eq!(c.to_string().parse::<CubeCoord>(), Ok(c));
        }
    }
}
