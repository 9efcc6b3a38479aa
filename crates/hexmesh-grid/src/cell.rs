//! Positioned cells.

use std::fmt;

use hexmesh_topology::{Axial, CubeCoord, HexKey};

/// A hex on the plane carrying an optional payload.
///
/// `q` and `r` are public: a caller holding `&mut Hex` may move it. A grid
/// storing the cell does not notice such a move until
/// [`Grid::recalibrate`](crate::Grid::recalibrate) is called.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Hex<T> {
    /// First axial coordinate
    pub q: i32,
    /// Second axial coordinate
    pub r: i32,
    /// Payload, absent by default
    pub data: Option<T>,
}

impl<T> Hex<T> {
    /// Empty hex at (q, r).
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r, data: None }
    }

    /// Hex at (q, r) carrying `data`.
    pub const fn with_data(q: i32, r: i32, data: T) -> Self {
        Self {
            q,
            r,
            data: Some(data),
        }
    }

    /// Hex at `coord` with an optional payload.
    pub fn at(coord: impl Into<CubeCoord>, data: Option<T>) -> Self {
        let coord = coord.into();
        Self {
            q: coord.q,
            r: coord.r,
            data,
        }
    }

    /// Derived third axis, widened so that every (q, r) has one.
    #[inline]
    pub const fn s(&self) -> i64 {
        -(self.q as i64) - (self.r as i64)
    }

    /// Current coordinate.
    #[inline]
    pub const fn coord(&self) -> CubeCoord {
        CubeCoord::new(self.q, self.r)
    }

    /// Move the hex to `coord`.
    pub fn set_coord(&mut self, coord: impl Into<CubeCoord>) {
        let coord = coord.into();
        self.q = coord.q;
        self.r = coord.r;
    }

    /// Canonical key of the current coordinate.
    #[inline]
    pub const fn key(&self) -> HexKey {
        HexKey::new(self.q, self.r)
    }

    /// Borrow the payload, if any.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Rotate in place `times` sixths of a turn left around the origin.
    pub fn rotate_left(&mut self, times: i32) -> &mut Self {
        self.rotate_left_about(times, CubeCoord::ORIGIN)
    }

    /// Rotate in place `times` sixths of a turn right around the origin.
    pub fn rotate_right(&mut self, times: i32) -> &mut Self {
        self.rotate_right_about(times, CubeCoord::ORIGIN)
    }

    /// Rotate in place `times` sixths of a turn left around `center`.
    pub fn rotate_left_about(&mut self, times: i32, center: impl Into<CubeCoord>) -> &mut Self {
        let turned = self.coord().rotate_left(times, center.into());
        self.set_coord(turned);
        self
    }

    /// Rotate in place `times` sixths of a turn right around `center`.
    pub fn rotate_right_about(&mut self, times: i32, center: impl Into<CubeCoord>) -> &mut Self {
        let turned = self.coord().rotate_right(times, center.into());
        self.set_coord(turned);
        self
    }
}

impl<T: Clone> Hex<T> {
    /// Constructor that fills missing payloads with a clone of `default`.
    ///
    /// A payload given to the constructor replaces the default outright; use
    /// [`hex_factory`] to combine the two instead.
    pub fn with_default(default: T) -> impl Fn(i32, i32, Option<T>) -> Hex<T> {
        hex_factory(default, |_, given| given)
    }
}

impl<T> Axial for Hex<T> {
    #[inline]
    fn q(&self) -> i32 {
        self.q
    }

    #[inline]
    fn r(&self) -> i32 {
        self.r
    }
}

impl<T> fmt::Display for Hex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.q, self.r)
    }
}

/// Build a hex constructor that closes over a default payload.
///
/// The returned closure takes `(q, r, payload)`. Without a payload the hex
/// gets a clone of `default`; with one it gets `merge(default.clone(), payload)`.
///
/// ```
/// use hexmesh_grid::hex_factory;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Tile { height: u8, owner: Option<&'static str> }
///
/// let tile = hex_factory(Tile { height: 1, owner: None }, |base, given: Tile| Tile {
///     owner: given.owner.or(base.owner),
///     ..given
/// });
///
/// assert_eq!(tile(0, 0, None).data, Some(Tile { height: 1, owner: None }));
/// let claimed = tile(1, -1, Some(Tile { height: 3, owner: Some("red") }));
/// assert_eq!(claimed.data.unwrap().owner, Some("red"));
/// ```
pub fn hex_factory<T, M>(default: T, merge: M) -> impl Fn(i32, i32, Option<T>) -> Hex<T>
where
    T: Clone,
    M: Fn(T, T) -> T,
{
    move |q, r, data| {
        let data = match data {
            Some(given) => merge(default.clone(), given),
            None => default.clone(),
        };
        Hex::with_data(q, r, data)
    }
}
