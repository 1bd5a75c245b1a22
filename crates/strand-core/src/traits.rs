//! The container contract shared by the dynamic array and the linked list.

use crate::error::SeqError;

/// Indexed, resizable sequence of `T`.
///
/// Implemented by `DynamicArray` and `SinglyLinkedList`. The two have
/// opposite cost profiles (O(1) vs O(i) access, amortized O(1) vs O(1)
/// append) but identical observable behaviour, including the exact
/// out-of-range boundaries:
///
/// | Operation | Valid indices |
/// |-----------|---------------|
/// | `at`, `at_mut`, `erase` | `0..size()` |
/// | `insert` | `0..=size()` |
pub trait Sequence<T> {
    /// Number of live elements.
    fn size(&self) -> usize;

    /// Whether the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Shared reference to the element at `index`.
    fn at(&self, index: usize) -> Result<&T, SeqError>;

    /// Mutable reference to the element at `index`.
    fn at_mut(&mut self, index: usize) -> Result<&mut T, SeqError>;

    /// Whether any stored element equals `value`. Linear scan.
    fn has_element(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Insert `value` so that it ends up at position `index`, shifting
    /// later elements back by one. `index == size()` appends.
    fn insert(&mut self, index: usize, value: T) -> Result<(), SeqError>;

    /// Append `value` after the last element.
    fn push_back(&mut self, value: T);

    /// Remove and return the element at `index`, shifting later elements
    /// forward by one.
    fn erase(&mut self, index: usize) -> Result<T, SeqError>;
}
