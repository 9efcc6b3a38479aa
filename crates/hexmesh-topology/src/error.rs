//! Error types for hexmesh-topology.

use thiserror::Error;

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors raised by the coordinate algebra.
///
/// All of these are caller programming errors: a raw direction value outside
/// the six enumerants, or text that is not a `"{q}x{r}"` coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// A raw direction bit that is not one of the six directions.
    #[error("invalid direction: {0:#04x} is not one of the six direction bits")]
    InvalidDirection(u8),

    /// A direction mask carrying bits outside the six direction bits.
    #[error("invalid direction mask: {0:#04x} has bits outside 0x3f")]
    InvalidDirectionMask(u8),

    /// Coordinate text that could not be parsed.
    #[error("cannot parse coordinate {input:?}: {reason}")]
    ParseCoord {
        input: String,
        reason: &'static str,
    },
}
