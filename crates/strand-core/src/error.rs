//! Error types for indexed container operations.

use std::error::Error;
use std::fmt;

/// The indexed operation that rejected an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeqOp {
    /// Element access (`at`, `at_mut`, indexing).
    At,
    /// Insertion before an existing position or at the end.
    Insert,
    /// Removal of an existing element.
    Erase,
}

impl fmt::Display for SeqOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At => write!(f, "at"),
            Self::Insert => write!(f, "insert"),
            Self::Erase => write!(f, "erase"),
        }
    }
}

/// Errors from indexed container operations.
///
/// There is exactly one recoverable failure: an index outside the valid
/// range for the requested operation. Allocation failure is not
/// represented here; it aborts through the global allocation error
/// handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeqError {
    /// The index was outside the valid range of the operation
    /// (`index >= len` for access and erase, `index > len` for insert).
    OutOfRange {
        /// The operation that was attempted.
        op: SeqOp,
        /// The rejected index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },
}

impl SeqError {
    /// The index that was rejected.
    pub fn index(&self) -> usize {
        match self {
            Self::OutOfRange { index, .. } => *index,
        }
    }

    /// The operation that rejected the index.
    pub fn op(&self) -> SeqOp {
        match self {
            Self::OutOfRange { op, .. } => *op,
        }
    }
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { op, index, len } => {
                write!(f, "{op}: index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for SeqError {}
