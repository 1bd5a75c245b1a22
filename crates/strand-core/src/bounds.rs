//! Index boundary checks shared by all containers.
//!
//! Both containers route every indexed operation through these two
//! functions, so the valid ranges are identical: `insert` accepts
//! `index == len` (append), everything else requires `index < len`.

use crate::error::{SeqError, SeqOp};

/// Validate an index that must refer to an existing element.
///
/// Returns `Err(SeqError::OutOfRange)` when `index >= len`.
#[inline]
pub fn check_index(op: SeqOp, index: usize, len: usize) -> Result<(), SeqError> {
    if index < len {
        Ok(())
    } else {
        Err(SeqError::OutOfRange { op, index, len })
    }
}

/// Validate an insertion position.
///
/// Returns `Err(SeqError::OutOfRange)` when `index > len`.
#[inline]
pub fn check_insert(index: usize, len: usize) -> Result<(), SeqError> {
    if index <= len {
        Ok(())
    } else {
        Err(SeqError::OutOfRange {
            op: SeqOp::Insert,
            index,
            len,
        })
    }
}
