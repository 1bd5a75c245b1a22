//! Element fixtures and read-only container helpers.

use std::cell::Cell;
use std::rc::Rc;

use strand_core::{SeqError, Sequence};

/// Counts how many [`Tracked`] values created from it have been dropped.
#[derive(Clone, Debug, Default)]
pub struct DropLedger {
    created: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so its drop is recorded here.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.created.set(self.created.get() + 1);
        Tracked {
            value,
            dropped: Rc::clone(&self.dropped),
        }
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// Tracked values still alive somewhere.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// A value that reports its drop to a [`DropLedger`].
///
/// Compares by the wrapped value only.
#[derive(Debug)]
pub struct Tracked<T> {
    pub value: T,
    dropped: Rc<Cell<usize>>,
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}

/// Read every element through `at`, index 0 first.
pub fn contents<S, T>(seq: &S) -> Result<Vec<T>, SeqError>
where
    S: Sequence<T>,
    T: Clone,
{
    (0..seq.size()).map(|i| seq.at(i).cloned()).collect()
}
