//! Board configuration from the environment.

use hexmesh_grid::{CubeCoord, Grid, Hex, HexagonOptions};
use hexmesh_topology::{cells_in_hexagon, TopologyError};
use thiserror::Error;

/// Largest board radius accepted from configuration.
pub const MAX_RADIUS: u32 = 1000;

/// Errors reading the board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The radius is not a number in range.
    #[error("{var}={value:?} is not a radius between 0 and {}", MAX_RADIUS)]
    InvalidRadius { var: &'static str, value: String },

    /// A coordinate could not be parsed.
    #[error("{var}: {source}")]
    InvalidCoord {
        var: &'static str,
        #[source]
        source: TopologyError,
    },
}

/// Board layout: a filled hexagon with optional holes punched in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Hexagon radius
    pub radius: u32,

    /// Hexagon centre
    pub center: CubeCoord,

    /// Coordinates removed from the board
    pub holes: Vec<CubeCoord>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            radius: 3,
            center: CubeCoord::ORIGIN,
            holes: Vec::new(),
        }
    }
}

impl BoardConfig {
    /// Read `HEXMESH_RADIUS`, `HEXMESH_CENTER` and `HEXMESH_HOLES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from any variable source; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("HEXMESH_RADIUS") {
            config.radius = value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|r| *r <= MAX_RADIUS)
                .ok_or(ConfigError::InvalidRadius {
                    var: "HEXMESH_RADIUS",
                    value,
                })?;
        }

        if let Some(value) = lookup("HEXMESH_CENTER") {
            config.center = value.parse().map_err(|source| ConfigError::InvalidCoord {
                var: "HEXMESH_CENTER",
                source,
            })?;
        }

        if let Some(value) = lookup("HEXMESH_HOLES") {
            config.holes = value
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(str::parse::<CubeCoord>)
                .collect::<Result<_, _>>()
                .map_err(|source| ConfigError::InvalidCoord {
                    var: "HEXMESH_HOLES",
                    source,
                })?;
        }

        Ok(config)
    }

    /// Build the board. Each cell's payload is its position in the hexagon walk.
    pub fn build(&self) -> Grid<u32> {
        let count = cells_in_hexagon(self.radius) as u32;
        let options = HexagonOptions::default().center(self.center).data(0..count);
        let mut grid: Grid<u32> = Hex::hexagon(self.radius, options).into_iter().collect();
        for hole in &self.holes {
            grid.remove(hole);
        }
        grid
    }
}
