//! The singly linked list.

#![allow(unsafe_code)]

use std::fmt;
use std::iter;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use strand_core::{check_index, check_insert, SeqError, SeqOp, Sequence};

use crate::node::{Link, Node};

/// Singly linked list with O(1) front and back insertion.
///
/// `head` owns the first node and, through each node's `next`, the whole
/// chain. `tail` is a non-owning back-reference to the last node; it is
/// `None` exactly when the list is empty, and it is re-derived from the
/// owning link whenever the last node's box moves or is freed.
///
/// Indexed access walks from the head, so `at(i)`, `insert(i, _)` and
/// `erase(i)` cost O(i). Access to the last element goes through `tail`.
///
/// # Example
///
/// ```
/// use strand_list::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(2);
/// list.push_back(3);
/// list.push_front(1);
/// list.insert(1, 9).unwrap();
/// assert_eq!(format!("{list:?}"), "[1, 9, 2, 3]");
///
/// assert_eq!(list.erase(0).unwrap(), 1);
/// assert_eq!(list.back(), Some(&3));
/// assert!(list.erase(3).is_err());
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
}

// SAFETY: the list uniquely owns every node through `head`; `tail` only
// aliases one of them.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
// SAFETY: shared access only hands out &T.
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

#[cold]
#[inline(never)]
fn chain_broken(len: usize) -> ! {
    panic!("node chain shorter than recorded length {len}")
}

impl<T> SinglyLinkedList<T> {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create a list of `len` copies of `value`, linked front to back.
    pub fn with_len(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut list = Self::new();
        if len > 0 {
            for _ in 1..len {
                list.push_back(value.clone());
            }
            list.push_back(value);
        }
        list
    }

    /// Create a list of `len` default values.
    pub fn with_len_default(len: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::with_len(len, T::default())
    }

    /// Number of nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Whether the list has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First element, O(1).
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.data)
    }

    /// Last element, O(1) through the tail back-reference.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: tail is Some only while the list is non-empty, and then
        // points at the last node, which the chain keeps alive for as
        // long as &self is held.
        self.tail.map(|ptr| unsafe { &(*ptr.as_ptr()).data })
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `back`, and &mut self guarantees exclusivity.
        self.tail.map(|ptr| unsafe { &mut (*ptr.as_ptr()).data })
    }

    /// Shared reference to the element at `index`. O(index).
    pub fn at(&self, index: usize) -> Result<&T, SeqError> {
        check_index(SeqOp::At, index, self.len)?;
        match self.nodes().nth(index) {
            Some(node) => Ok(&node.data),
            None => chain_broken(self.len),
        }
    }

    /// Mutable reference to the element at `index`. O(index), O(1) for
    /// the last element.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SeqError> {
        check_index(SeqOp::At, index, self.len)?;
        let len = self.len;
        let found = if index + 1 == len {
            self.back_mut()
        } else {
            self.node_mut(index).map(|node| &mut node.data)
        };
        match found {
            Some(data) => Ok(data),
            None => chain_broken(len),
        }
    }

    /// Whether any node's data equals `value`. Walks the whole chain.
    pub fn has_element(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.nodes().any(|node| node.data == *value)
    }

    /// Insert `value` so that it becomes the element at `index`.
    ///
    /// `index == 0` prepends, `index == size()` appends; anything in
    /// between is spliced in after the node at `index - 1`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), SeqError> {
        check_insert(index, self.len)?;
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        let len = self.len;
        if index == len {
            self.push_back(value);
            return Ok(());
        }
        let moved_tail = {
            let Some(prev) = self.node_mut(index - 1) else {
                chain_broken(len)
            };
            let next = prev.next.take();
            let node = prev.next.insert(Node::boxed(value, next));
            // Splicing in front of the last node moved its box.
            if index + 1 == len {
                node.next.as_deref_mut().map(NonNull::from)
            } else {
                None
            }
        };
        if moved_tail.is_some() {
            self.tail = moved_tail;
        }
        self.len += 1;
        Ok(())
    }

    /// Append `value`. O(1).
    pub fn push_back(&mut self, value: T) {
        let slot = match self.tail {
            None => &mut self.head,
            // SAFETY: tail points at the last node, whose `next` is the
            // terminal link; &mut self guarantees exclusivity.
            Some(tail) => unsafe { &mut (*tail.as_ptr()).next },
        };
        let node = slot.insert(Node::boxed(value, None));
        self.tail = Some(NonNull::from(&mut **node));
        self.len += 1;
    }

    /// Prepend `value`. O(1).
    pub fn push_front(&mut self, value: T) {
        let old = self.head.take();
        let head = self.head.insert(Node::boxed(value, old));
        match self.len {
            0 => self.tail = Some(NonNull::from(&mut **head)),
            // The old head was also the tail, and its box just moved.
            1 => self.tail = head.next.as_deref_mut().map(NonNull::from),
            _ => {}
        }
        self.len += 1;
    }

    /// Unlink and return the element at `index`. O(index).
    ///
    /// Erasing the last node moves `tail` to its predecessor; erasing
    /// the only node clears both `head` and `tail`.
    pub fn erase(&mut self, index: usize) -> Result<T, SeqError> {
        check_index(SeqOp::Erase, index, self.len)?;
        let len = self.len;
        if index == 0 {
            return match self.pop_front() {
                Some(data) => Ok(data),
                None => chain_broken(len),
            };
        }
        let (data, new_tail) = {
            let Some(prev) = self.node_mut(index - 1) else {
                chain_broken(len)
            };
            let Some(mut target) = prev.next.take() else {
                chain_broken(len)
            };
            prev.next = target.next.take();
            let new_tail = if index + 1 == len {
                Some(NonNull::from(prev))
            } else if index + 2 == len {
                // The last node's box moved up into `prev.next`.
                prev.next.as_deref_mut().map(NonNull::from)
            } else {
                None
            };
            (target.data, new_tail)
        };
        if new_tail.is_some() {
            self.tail = new_tail;
        }
        self.len -= 1;
        Ok(data)
    }

    fn pop_front(&mut self) -> Option<T> {
        let mut head = self.head.take()?;
        self.head = head.next.take();
        self.len -= 1;
        match self.len {
            0 => self.tail = None,
            // The last node's box moved up into `head`.
            1 => self.tail = self.head.as_deref_mut().map(NonNull::from),
            _ => {}
        }
        Some(head.data)
    }

    /// Mutable walk to the node at `index`, head first.
    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut cur = self.head.as_deref_mut();
        for _ in 0..index {
            cur = cur?.next.as_deref_mut();
        }
        cur
    }

    /// Read-only walk over the chain, head first.
    fn nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref())
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink one box at a time so long chains cannot overflow the
        // stack through nested drops.
        self.tail = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for node in self.nodes() {
            copy.push_back(node.data.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .nodes()
                .zip(other.nodes())
                .all(|(a, b)| a.data == b.data)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.nodes().map(|node| &node.data))
            .finish()
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Sequence<T> for SinglyLinkedList<T> {
    fn size(&self) -> usize {
        SinglyLinkedList::size(self)
    }

    fn at(&self, index: usize) -> Result<&T, SeqError> {
        SinglyLinkedList::at(self, index)
    }

    fn at_mut(&mut self, index: usize) -> Result<&mut T, SeqError> {
        SinglyLinkedList::at_mut(self, index)
    }

    fn has_element(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        SinglyLinkedList::has_element(self, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), SeqError> {
        SinglyLinkedList::insert(self, index, value)
    }

    fn push_back(&mut self, value: T) {
        SinglyLinkedList::push_back(self, value)
    }

    fn erase(&mut self, index: usize) -> Result<T, SeqError> {
        SinglyLinkedList::erase(self, index)
    }
}
