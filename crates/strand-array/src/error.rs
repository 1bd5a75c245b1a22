//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors from validating an [`ArrayConfig`](crate::ArrayConfig).
///
/// Raised only at construction; indexed operations report
/// [`SeqError`](strand_core::SeqError) instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The shrink divisor would let a freshly halved buffer be full.
    ShrinkDivisorTooSmall {
        /// The rejected divisor.
        divisor: usize,
        /// The smallest accepted divisor.
        minimum: usize,
    },
    /// `initial_capacity` slots of the element type exceed the address
    /// space.
    InitialCapacityOverflow {
        /// The requested number of slots.
        requested: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShrinkDivisorTooSmall { divisor, minimum } => {
                write!(f, "shrink divisor {divisor} is below the minimum of {minimum}")
            }
            Self::InitialCapacityOverflow { requested } => {
                write!(f, "initial capacity of {requested} slots overflows the address space")
            }
        }
    }
}

impl Error for ConfigError {}
