//! Delay line error types

use thiserror::Error;

/// Errors that can occur while building delay lines
///
/// The hot path (`write`/`read`) never returns these: contract violations
/// there are debug assertions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DelayError {
    /// A ring buffer needs at least one slot
    #[error("Delay buffer capacity must be greater than zero")]
    ZeroCapacity,

    /// Requested delay plus block does not fit in the buffer
    #[error("Delay buffer too small: need {required} samples, capacity is {capacity}")]
    CapacityTooSmall { required: usize, capacity: usize },

    /// Configuration values are out of range
    #[error("Invalid delay line config: {0}")]
    InvalidConfig(String),
}

/// Result type for delay line operations
pub type DelayResult<T> = Result<T, DelayError>;
