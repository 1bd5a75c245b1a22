//! Test utilities for Strand development.
//!
//! Provides a `Vec`-backed reference model ([`model`]) that any
//! [`Sequence`](strand_core::Sequence) implementation can be checked
//! against, proptest strategies that generate operation scripts
//! ([`strategies`]), and element fixtures that observe drops
//! ([`fixtures`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod model;
pub mod strategies;

pub use fixtures::{contents, DropLedger, Tracked};
pub use model::{check_against_model, Divergence, Step};
