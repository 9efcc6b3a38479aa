//! Error types for hexmesh-grid.

use hexmesh_topology::TopologyError;
use thiserror::Error;

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur in grid operations.
///
/// Missing cells are never errors; lookups and searches report them as
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The coordinate algebra rejected an input.
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// A cell record whose explicit `s` breaks `q + r + s = 0`.
    #[error("coordinate mismatch: q={q}, r={r}, s={s} does not sum to zero")]
    CoordinateMismatch { q: i32, r: i32, s: i64 },
}
