//! Cell-set generators.
//!
//! Rings and filled hexagons of [`Hex`] cells around a centre, with payloads
//! seeded positionally from a list. The walk order is the one of
//! [`hexmesh_topology::ring`]; a hexagon hands one flat payload list across
//! all of its rings.

use hexmesh_topology::{hexagon, ring, CubeCoord, RingOrder};

use crate::cell::Hex;

/// Options for [`Hex::ring`].
#[derive(Debug, Clone, PartialEq)]
pub struct RingOptions<T> {
    /// Centre of the ring
    pub center: CubeCoord,
    /// Payloads assigned in walk order
    pub data: Vec<T>,
    /// Payload cloned into cells past the end of `data`
    pub default: Option<T>,
}

impl<T> Default for RingOptions<T> {
    fn default() -> Self {
        Self {
            center: CubeCoord::ORIGIN,
            data: Vec::new(),
            default: None,
        }
    }
}

impl<T> RingOptions<T> {
    /// Set the centre.
    pub fn center(mut self, center: impl Into<CubeCoord>) -> Self {
        self.center = center.into();
        self
    }

    /// Set the positional payloads.
    pub fn data(mut self, data: impl IntoIterator<Item = T>) -> Self {
        self.data = data.into_iter().collect();
        self
    }

    /// Set the fallback payload.
    pub fn default_data(mut self, default: T) -> Self {
        self.default = Some(default);
        self
    }
}

/// Options for [`Hex::hexagon`].
#[derive(Debug, Clone, PartialEq)]
pub struct HexagonOptions<T> {
    /// Centre of the hexagon
    pub center: CubeCoord,
    /// Payloads assigned in walk order across all rings
    pub data: Vec<T>,
    /// Payload cloned into cells past the end of `data`
    pub default: Option<T>,
    /// Ring concatenation order
    pub order: RingOrder,
}

impl<T> Default for HexagonOptions<T> {
    fn default() -> Self {
        Self {
            center: CubeCoord::ORIGIN,
            data: Vec::new(),
            default: None,
            order: RingOrder::default(),
        }
    }
}

impl<T> HexagonOptions<T> {
    /// Set the centre.
    pub fn center(mut self, center: impl Into<CubeCoord>) -> Self {
        self.center = center.into();
        self
    }

    /// Set the positional payloads.
    pub fn data(mut self, data: impl IntoIterator<Item = T>) -> Self {
        self.data = data.into_iter().collect();
        self
    }

    /// Set the fallback payload.
    pub fn default_data(mut self, default: T) -> Self {
        self.default = Some(default);
        self
    }

    /// Set the ring order.
    pub fn order(mut self, order: RingOrder) -> Self {
        self.order = order;
        self
    }
}

impl<T> From<RingOptions<T>> for HexagonOptions<T> {
    fn from(options: RingOptions<T>) -> Self {
        Self {
            center: options.center,
            data: options.data,
            default: options.default,
            order: RingOrder::default(),
        }
    }
}

impl<T: Clone> Hex<T> {
    /// The ring of cells at `radius` around the configured centre.
    ///
    /// ```
    /// use hexmesh_grid::{Hex, RingOptions};
    ///
    /// let ring = Hex::ring(1, RingOptions::default().center((10, 0)).data(["a", "b"]));
    /// assert_eq!(ring.len(), 6);
    /// assert_eq!(ring[0].to_string(), "10x1");
    /// assert_eq!(ring[1].data, Some("b"));
    /// assert_eq!(ring[2].data, None);
    /// ```
    pub fn ring(radius: u32, options: RingOptions<T>) -> Vec<Hex<T>> {
        seed(ring(options.center, radius), options.data, options.default)
    }

    /// The filled hexagon of cells up to `radius` around the configured centre.
    pub fn hexagon(radius: u32, options: HexagonOptions<T>) -> Vec<Hex<T>> {
        seed(
            hexagon(options.center, radius, options.order),
            options.data,
            options.default,
        )
    }
}

fn seed<T: Clone>(
    coords: impl Iterator<Item = CubeCoord>,
    data: Vec<T>,
    default: Option<T>,
) -> Vec<Hex<T>> {
    let mut data = data.into_iter();
    let mut cells = Vec::with_capacity(coords.size_hint().0);
    for coord in coords {
        let payload = data.next().or_else(|| default.clone());
        cells.push(Hex::at(coord, payload));
    }
    cells
}
