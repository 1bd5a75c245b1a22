//! Manually managed element buffer.
//!
//! [`RawBuffer`] owns one allocation of `capacity` slots of `T`, of which
//! the first `len` are initialised. Every method keeps that prefix
//! invariant, so the safe surface cannot read uninitialised memory or
//! leak elements. Capacity decisions belong to the caller; this module
//! only allocates, moves and releases.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    len: usize,
    _owns: PhantomData<T>,
}

// SAFETY: RawBuffer uniquely owns its allocation and elements, like Box<[T]>.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out &T.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T> RawBuffer<T> {
    /// Allocate room for `capacity` elements, none initialised.
    ///
    /// Allocation failure is fatal and goes through
    /// [`alloc::handle_alloc_error`].
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            ptr: Self::allocate(capacity),
            capacity,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Whether `capacity` slots of `T` form a valid allocation layout.
    pub(crate) fn fits(capacity: usize) -> bool {
        Layout::array::<T>(capacity).is_ok()
    }

    fn layout(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).unwrap_or_else(|_| capacity_overflow())
    }

    fn allocate(capacity: usize) -> NonNull<T> {
        let layout = Self::layout(capacity);
        if layout.size() == 0 {
            return NonNull::dangling();
        }
        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc::alloc(layout) }.cast::<T>();
        NonNull::new(raw).unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }

    fn release(ptr: NonNull<T>, capacity: usize) {
        let layout = Self::layout(capacity);
        if layout.size() == 0 {
            return;
        }
        // SAFETY: ptr was returned by `allocate(capacity)` with this exact layout.
        unsafe { alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialised; ptr is aligned and
        // non-null even when dangling.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and &mut self guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Write `value` into the first free slot.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full.
    pub(crate) fn push(&mut self, value: T) {
        assert!(self.len < self.capacity, "push into a full buffer");
        // SAFETY: slot `len` is inside the allocation and uninitialised.
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Shift `[index, len)` one slot right and write `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or the buffer is full.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        assert!(index <= self.len, "insert position past the initialised prefix");
        assert!(self.len < self.capacity, "insert into a full buffer");
        // SAFETY: source [index, len) and destination [index + 1, len + 1)
        // are both inside the allocation; `ptr::copy` handles the overlap.
        unsafe {
            let base = self.ptr.as_ptr().add(index);
            ptr::copy(base, base.add(1), self.len - index);
            base.write(value);
        }
        self.len += 1;
    }

    /// Take the element at `index` and shift `(index, len)` one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "remove position outside the initialised prefix");
        // SAFETY: slot `index` is initialised; after the read it is
        // logically moved-out and immediately overwritten by the shift.
        unsafe {
            let base = self.ptr.as_ptr().add(index);
            let value = base.read();
            ptr::copy(base.add(1), base, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Move the initialised prefix into a fresh allocation of
    /// `new_capacity` slots and release the old one.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity < len`.
    pub(crate) fn relocate(&mut self, new_capacity: usize) {
        assert!(new_capacity >= self.len, "relocation would drop elements");
        let fresh = Self::allocate(new_capacity);
        // SAFETY: both regions hold at least `len` slots and are distinct
        // allocations (or zero-sized, where the copy is a no-op).
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), fresh.as_ptr(), self.len) };
        let old = mem::replace(&mut self.ptr, fresh);
        let old_capacity = mem::replace(&mut self.capacity, new_capacity);
        Self::release(old, old_capacity);
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        // Zero the length first so a panicking element destructor cannot
        // lead to a second drop of the same prefix.
        let live: *mut [T] = self.as_mut_slice();
        self.len = 0;
        // SAFETY: `live` covers exactly the initialised prefix.
        unsafe { ptr::drop_in_place(live) };
        Self::release(self.ptr, self.capacity);
    }
}
