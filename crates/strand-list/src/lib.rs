//! Singly linked list for Strand.
//!
//! Each node owns its successor; the list owns the head and keeps a
//! non-owning pointer to the last node so appends are O(1):
//!
//! ```text
//! head ──▶ [a] ──▶ [b] ──▶ [c] ──▶ ∅
//!                           ▲
//! tail ·····················┘  (borrowed, never freed through)
//! ```
//!
//! Every `next` link and `head` is an `Option<Box<_>>`, so each node has
//! exactly one owner and the chain cannot form a cycle. `tail` is the
//! only raw pointer; the `unsafe` blocks in [`list`] that dereference it
//! are the crate's whole unsafe surface.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod list;
mod node;

pub use list::SinglyLinkedList;
