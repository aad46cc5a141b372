//! Error types for fracture operations.

use thiserror::Error;

/// Errors raised while configuring a fracture run or preparing its input.
///
/// The subdivision loop itself is infallible once the configuration has
/// been validated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractureError {
    /// Spawn strategy name is not one of `none`, `random`, `randomFade`.
    #[error("unknown spawn strategy: {0:?} (expected none, random or randomFade)")]
    UnknownStrategy(String),

    /// Minimum area is negative or not finite.
    #[error("invalid minimum area: {0} (must be finite and >= 0)")]
    InvalidMinArea(f64),

    /// Fragment cap is zero.
    #[error("invalid maximum fragment count: {0} (must be >= 1)")]
    InvalidMaxFragments(usize),

    /// Index buffer length is not a multiple of three.
    #[error("index buffer of length {len} does not describe whole triangles")]
    IncompleteTriangle {
        /// Number of indices supplied.
        len: usize,
    },

    /// Index does not address a point in the point buffer.
    #[error("index {index} out of bounds for {len} points")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Number of points available.
        len: usize,
    },
}

/// Result type for fracture operations.
pub type FractureResult<T> = std::result::Result<T, FractureError>;
