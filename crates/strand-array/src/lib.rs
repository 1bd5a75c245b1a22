//! Growable contiguous array for Strand.
//!
//! [`DynamicArray`] owns a single heap buffer that it allocates, moves
//! and releases itself. The buffer doubles when an insertion finds it
//! full and halves when an erase leaves it sparsely used:
//!
//! ```text
//! DynamicArray<T>
//! ├── ArrayConfig   (initial capacity, shrink floor, shrink threshold)
//! └── RawBuffer<T>  (allocation + initialised prefix of `len` slots)
//! ```
//!
//! Growth: `0 → 1 → 2 → 4 → ...` whenever `len == capacity` on insert.
//! Shrink: `capacity → capacity / 2` after an erase leaves
//! `len * shrink_divisor <= capacity`, never below `min_capacity`.
//! The gap between the grow point (full) and the shrink point (a quarter
//! full by default) keeps alternating insert/erase at a boundary from
//! reallocating on every call.
//!
//! All pointer work lives in the private `raw` module, the only module
//! permitted to contain `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
mod raw;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use config::ArrayConfig;
pub use error::ConfigError;
