//! Error types shared by the Gaussian and Hurwitz integer types.

use thiserror::Error;

/// Result type alias for fallible ring operations.
pub type Result<T> = core::result::Result<T, RingError>;

/// Violated preconditions of ring operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// The divisor of a Euclidean division is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Doubled quaternion components mix even and odd values, i.e. the quaternion
    /// would have both integer and half-integer coordinates.
    #[error("doubled components must be all even or all odd")]
    MixedParity,
}
