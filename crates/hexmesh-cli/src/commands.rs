//! Command parsing and execution.

use hexmesh_grid::{CubeCoord, Grid, GridError, Hex, TopologyError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from parsing or running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no command given")]
    MissingCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} requires {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: String },

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which way to turn the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// A single invocation of the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Shortest path between two cells
    Path { from: CubeCoord, to: CubeCoord },
    /// Hop count between two cells
    Distance { from: CubeCoord, to: CubeCoord },
    /// Stored neighbours selected by a raw direction mask
    Neighbours { coord: CubeCoord, mask: u8 },
    /// Connected components of the given cells, or of the whole board
    Groups { subset: Vec<CubeCoord> },
    /// Rotate the board in sixty degree steps
    Rotate {
        turn: Turn,
        times: i32,
        center: CubeCoord,
    },
    /// Every stored cell
    Export,
}

#[derive(Debug, Serialize)]
struct PathReport<'a> {
    from: CubeCoord,
    to: CubeCoord,
    hops: Option<usize>,
    path: Option<Vec<&'a Hex<u32>>>,
}

#[derive(Debug, Serialize)]
struct DistanceReport {
    from: CubeCoord,
    to: CubeCoord,
    distance: Option<usize>,
}

fn coord(command: &'static str, what: &'static str, arg: Option<&String>) -> Result<CubeCoord, CliError> {
    let arg = arg.ok_or(CliError::MissingArgument { command, what })?;
    Ok(arg.parse()?)
}

fn parse_mask(arg: &str) -> Result<u8, CliError> {
    let parsed = match arg.strip_prefix("0b") {
        Some(bits) => u8::from_str_radix(bits, 2),
        None => arg.parse(),
    };
    parsed.map_err(|_| CliError::InvalidArgument {
        what: "direction mask",
        value: arg.to_string(),
    })
}

impl Command {
    /// Parse the arguments following the program name.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let (name, rest) = args.split_first().ok_or(CliError::MissingCommand)?;

        match name.as_str() {
            "path" => Ok(Command::Path {
                from: coord("path", "a start coordinate", rest.first())?,
                to: coord("path", "a goal coordinate", rest.get(1))?,
            }),
            "distance" => Ok(Command::Distance {
                from: coord("distance", "a start coordinate", rest.first())?,
                to: coord("distance", "a goal coordinate", rest.get(1))?,
            }),
            "neighbours" | "neighbors" => Ok(Command::Neighbours {
                coord: coord("neighbours", "a coordinate", rest.first())?,
                mask: rest.get(1).map(|m| parse_mask(m)).transpose()?.unwrap_or(63),
            }),
            "groups" => Ok(Command::Groups {
                subset: rest
                    .iter()
                    .map(|c| c.parse::<CubeCoord>())
                    .collect::<Result<_, _>>()?,
            }),
            "rotate" => {
                let turn = match rest.first().map(String::as_str) {
                    Some("left") => Turn::Left,
                    Some("right") => Turn::Right,
                    Some(other) => {
                        return Err(CliError::InvalidArgument {
                            what: "turn",
                            value: other.to_string(),
                        })
                    }
                    None => {
                        return Err(CliError::MissingArgument {
                            command: "rotate",
                            what: "left or right",
                        })
                    }
                };
                let times = match rest.get(1) {
                    Some(t) => t.parse::<i32>().map_err(|_| CliError::InvalidArgument {
                        what: "step count",
                        value: t.clone(),
                    })?,
                    None => 1,
                };
                let center = match rest.get(2) {
                    Some(c) => c.parse()?,
                    None => CubeCoord::ORIGIN,
                };
                Ok(Command::Rotate { turn, times, center })
            }
            "export" => Ok(Command::Export),
            other => Err(CliError::UnknownCommand(other.to_string())),
        }
    }

    /// Run against `grid` and return the JSON report.
    pub fn run(&self, grid: &mut Grid<u32>) -> Result<Value, CliError> {
        debug!(command = ?self, cells = grid.len(), "Running command");

        let value = match self {
            Command::Path { from, to } => {
                let path = grid.path(*from, *to);
                serde_json::to_value(PathReport {
                    from: *from,
                    to: *to,
                    hops: path.as_ref().map(|p| p.len().saturating_sub(1)),
                    path,
                })?
            }
            Command::Distance { from, to } => serde_json::to_value(DistanceReport {
                from: *from,
                to: *to,
                distance: grid.distance(*from, *to),
            })?,
            Command::Neighbours { coord, mask } => {
                serde_json::to_value(grid.neighbours_raw(*coord, *mask)?)?
            }
            Command::Groups { subset } => {
                let groups = if subset.is_empty() {
                    grid.groups(sorted(grid).into_iter().map(Hex::coord))
                } else {
                    grid.groups(subset)
                };
                info!(groups = groups.len(), "Grouped cells");
                serde_json::to_value(groups)?
            }
            Command::Rotate { turn, times, center } => {
                let before = grid.len();
                match turn {
                    Turn::Left => grid.rotate_left_about(*times, *center),
                    Turn::Right => grid.rotate_right_about(*times, *center),
                };
                info!(?turn, times, %center, lost = before - grid.len(), "Rotated board");
                serde_json::to_value(sorted(grid))?
            }
            Command::Export => serde_json::to_value(sorted(grid))?,
        };

        Ok(value)
    }
}

/// Cells in (q, r) order so output is stable across runs.
fn sorted(grid: &Grid<u32>) -> Vec<&Hex<u32>> {
    let mut cells = grid.export();
    cells.sort_by_key(|hex| (hex.q, hex.r));
    cells
}
