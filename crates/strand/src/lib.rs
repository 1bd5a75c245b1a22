//! Strand: a dynamic array and a singly linked list over hand-managed
//! storage.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Strand sub-crates. For most users, adding `strand` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! fn fill<S: Sequence<i32>>(seq: &mut S) -> Result<(), SeqError> {
//!     seq.push_back(1);
//!     seq.push_back(2);
//!     seq.push_back(3);
//!     seq.insert(1, 9)?;
//!     seq.erase(0)?;
//!     Ok(())
//! }
//!
//! let mut arr = DynamicArray::new();
//! let mut list = SinglyLinkedList::new();
//! fill(&mut arr).unwrap();
//! fill(&mut list).unwrap();
//!
//! assert_eq!(arr.as_slice(), &[9, 2, 3]);
//! assert_eq!(format!("{list:?}"), "[9, 2, 3]");
//! assert!(arr.has_element(&2) && list.has_element(&2));
//! assert!(matches!(list.at(3), Err(SeqError::OutOfRange { .. })));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strand-core` | `Sequence` trait, `SeqError`, bounds checks |
//! | [`array`] | `strand-array` | `DynamicArray`, `ArrayConfig` |
//! | [`list`] | `strand-list` | `SinglyLinkedList` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The shared container contract and its error type (`strand-core`).
pub use strand_core as types;

/// Growable array with doubling/halving capacity (`strand-array`).
///
/// Tune the shrink side of the policy with [`array::ArrayConfig`].
pub use strand_array as array;

/// Singly linked list with O(1) append (`strand-list`).
pub use strand_list as list;

/// Common imports for typical Strand usage.
///
/// ```rust
/// use strand::prelude::*;
/// ```
pub mod prelude {
    // Contract
    pub use strand_core::{SeqError, SeqOp, Sequence};

    // Containers
    pub use strand_array::{ArrayConfig, ConfigError, DynamicArray};
    pub use strand_list::SinglyLinkedList;
}
