//! Core types and traits for the Strand container workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the contract shared by every Strand container: the single
//! out-of-range error, the index boundary checks, and the
//! [`Sequence`] trait that makes a dynamic array and a linked list
//! interchangeable from a caller's point of view.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod traits;

pub use bounds::{check_index, check_insert};
pub use error::{SeqError, SeqOp};
pub use traits::Sequence;

/// Convenience alias for results of indexed container operations.
pub type Result<T> = std::result::Result<T, SeqError>;
