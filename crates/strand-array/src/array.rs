//! The growable array and its doubling/halving capacity policy.

use std::fmt;
use std::ops::{Index, IndexMut};

use log::{debug, trace};
use strand_core::{check_index, check_insert, SeqError, SeqOp, Sequence};

use crate::config::ArrayConfig;
use crate::error::ConfigError;
use crate::raw::RawBuffer;

/// Contiguous, growable array of `T` over a manually managed buffer.
///
/// Holds `size()` live elements in `max_size()` allocated slots, with
/// `size() <= max_size()` at all times. References returned by
/// [`at`](Self::at) and [`at_mut`](Self::at_mut) borrow the array, so
/// they cannot outlive the next reallocation.
///
/// # Example
///
/// ```
/// use strand_array::DynamicArray;
///
/// let mut arr = DynamicArray::new();
/// arr.push_back(1);
/// arr.push_back(2);
/// arr.push_back(3);
/// arr.insert(1, 9).unwrap();
/// assert_eq!(arr.as_slice(), &[1, 9, 2, 3]);
///
/// assert_eq!(arr.erase(0).unwrap(), 1);
/// assert!(arr.has_element(&2));
/// assert!(arr.at(3).is_err());
/// ```
pub struct DynamicArray<T> {
    buf: RawBuffer<T>,
    config: ArrayConfig,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default policy.
    pub fn new() -> Self {
        Self::from_valid_config(ArrayConfig::new())
    }

    /// Create an empty array with a custom capacity policy.
    ///
    /// Returns `Err(ConfigError)` if the policy could oscillate or the
    /// initial capacity cannot be laid out for `T`.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ConfigError> {
        if let Err(e) = Self::check_config(&config) {
            debug!("rejected array config {config:?}: {e}");
            return Err(e);
        }
        Ok(Self::from_valid_config(config))
    }

    fn check_config(config: &ArrayConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if !RawBuffer::<T>::fits(config.initial_capacity) {
            return Err(ConfigError::InitialCapacityOverflow {
                requested: config.initial_capacity,
            });
        }
        Ok(())
    }

    fn from_valid_config(config: ArrayConfig) -> Self {
        Self {
            buf: RawBuffer::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Create an array holding `len` copies of `value`.
    ///
    /// Capacity is `len`, or the default initial capacity if larger.
    pub fn with_len(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let config = ArrayConfig::new();
        let mut buf = RawBuffer::with_capacity(len.max(config.initial_capacity));
        if len > 0 {
            for _ in 1..len {
                buf.push(value.clone());
            }
            buf.push(value);
        }
        Self { buf, config }
    }

    /// Create an array holding `len` default values.
    pub fn with_len_default(len: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::with_len(len, T::default())
    }

    /// Number of live elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Number of allocated slots.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.buf.capacity()
    }

    /// Alias for [`max_size`](Self::max_size).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// The capacity policy in effect.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Read-only view of the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Shared reference to the element at `index`.
    pub fn at(&self, index: usize) -> Result<&T, SeqError> {
        check_index(SeqOp::At, index, self.size())?;
        Ok(&self.buf.as_slice()[index])
    }

    /// Mutable reference to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SeqError> {
        check_index(SeqOp::At, index, self.size())?;
        Ok(&mut self.buf.as_mut_slice()[index])
    }

    /// Whether any element equals `value`.
    pub fn has_element(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().iter().any(|item| item == value)
    }

    /// Insert `value` at `index`, shifting `[index, size())` right.
    ///
    /// Doubles the buffer first if it is full.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), SeqError> {
        check_insert(index, self.size())?;
        self.reserve_one();
        self.buf.insert(index, value);
        Ok(())
    }

    /// Append `value`. Amortized O(1).
    pub fn push_back(&mut self, value: T) {
        self.reserve_one();
        self.buf.push(value);
    }

    /// Remove and return the element at `index`, shifting
    /// `(index, size())` left, then halve the buffer if it has become
    /// sparse.
    pub fn erase(&mut self, index: usize) -> Result<T, SeqError> {
        check_index(SeqOp::Erase, index, self.size())?;
        let value = self.buf.remove(index);
        if self.config.should_shrink(self.size(), self.max_size()) {
            self.reallocate(self.max_size() / 2);
        }
        Ok(value)
    }

    fn reserve_one(&mut self) {
        let capacity = self.max_size();
        if self.size() < capacity {
            return;
        }
        let grown = if capacity == 0 {
            1
        } else {
            capacity
                .checked_mul(2)
                .unwrap_or_else(|| panic!("capacity overflow"))
        };
        self.reallocate(grown);
    }

    fn reallocate(&mut self, new_capacity: usize) {
        trace!(
            "dynamic array realloc: capacity {} -> {new_capacity}, len {}",
            self.max_size(),
            self.size()
        );
        self.buf.relocate(new_capacity);
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut buf = RawBuffer::with_capacity(self.max_size());
        for item in self.buf.as_slice() {
            buf.push(item.clone());
        }
        Self {
            buf,
            config: self.config.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Sequence<T> for DynamicArray<T> {
    fn size(&self) -> usize {
        DynamicArray::size(self)
    }

    fn at(&self, index: usize) -> Result<&T, SeqError> {
        DynamicArray::at(self, index)
    }

    fn at_mut(&mut self, index: usize) -> Result<&mut T, SeqError> {
        DynamicArray::at_mut(self, index)
    }

    fn has_element(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        DynamicArray::has_element(self, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), SeqError> {
        DynamicArray::insert(self, index, value)
    }

    fn push_back(&mut self, value: T) {
        DynamicArray::push_back(self, value)
    }

    fn erase(&mut self, index: usize) -> Result<T, SeqError> {
        DynamicArray::erase(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn filled(values: &[i32]) -> DynamicArray<i32> {
        let mut arr = DynamicArray::new();
        for &v in values {
            arr.push_back(v);
        }
        arr
    }

    #[test]
    fn push_insert_erase_scenario() {
        let mut arr = filled(&[1, 2, 3]);
        assert_eq!(arr.size(), 3);
        assert_eq!(arr.as_slice(), &[1, 2, 3]);

        arr.insert(1, 9).unwrap();
        assert_eq!(arr.as_slice(), &[1, 9, 2, 3]);

        assert_eq!(arr.erase(0).unwrap(), 1);
        assert_eq!(arr.as_slice(), &[9, 2, 3]);
        assert!(arr.has_element(&2));
        assert!(!arr.has_element(&5));
    }

    #[test]
    fn new_is_empty_without_allocation() {
        let arr: DynamicArray<u8> = DynamicArray::new();
        assert_eq!(arr.size(), 0);
        assert_eq!(arr.max_size(), 0);
        assert!(arr.is_empty());
    }

    #[test]
    fn with_len_fills_copies() {
        let arr = DynamicArray::with_len(4, String::from("x"));
        assert_eq!(arr.size(), 4);
        assert!(arr.max_size() >= 4);
        assert!(arr.as_slice().iter().all(|s| s == "x"));

        let zeros: DynamicArray<u32> = DynamicArray::with_len_default(3);
        assert_eq!(zeros.as_slice(), &[0, 0, 0]);

        let empty = DynamicArray::with_len(0, 7u8);
        assert!(empty.is_empty());
    }

    #[test]
    fn capacity_doubles_from_one() {
        let mut arr = DynamicArray::new();
        let mut seen = Vec::new();
        for i in 0..9 {
            arr.push_back(i);
            seen.push(arr.max_size());
        }
        assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn insert_grows_when_full() {
        let mut arr = filled(&[1, 2]);
        assert_eq!(arr.max_size(), 2);
        arr.insert(0, 0).unwrap();
        assert_eq!(arr.max_size(), 4);
        assert_eq!(arr.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn shrinks_by_half_at_quarter_utilization() {
        let mut arr = filled(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(arr.max_size(), 16);
        while arr.size() > 5 {
            arr.erase(0).unwrap();
        }
        assert_eq!(arr.max_size(), 16);
        arr.erase(0).unwrap();
        // len 4 of 16 is a quarter.
        assert_eq!(arr.max_size(), 8);
        assert_eq!(arr.as_slice(), &[5, 6, 7, 8]);
    }

    #[test]
    fn never_shrinks_below_floor() {
        let mut arr = filled(&[1, 2, 3, 4]);
        for _ in 0..4 {
            arr.erase(0).unwrap();
        }
        assert!(arr.is_empty());
        assert_eq!(arr.max_size(), 1);
    }

    #[test]
    fn custom_floor_is_honoured() {
        let config = ArrayConfig::new().with_min_capacity(8);
        let mut arr = DynamicArray::with_config(config).unwrap();
        for i in 0..16 {
            arr.push_back(i);
        }
        for _ in 0..16 {
            arr.erase(0).unwrap();
        }
        assert_eq!(arr.max_size(), 8);
    }

    #[test]
    fn initial_capacity_preallocates() {
        let config = ArrayConfig::new().with_initial_capacity(10);
        let mut arr = DynamicArray::with_config(config).unwrap();
        assert_eq!(arr.max_size(), 10);
        for i in 0..10 {
            arr.push_back(i);
        }
        assert_eq!(arr.max_size(), 10);
        arr.push_back(10);
        assert_eq!(arr.max_size(), 20);
    }

    #[test]
    fn oscillating_config_rejected() {
        let config = ArrayConfig::new().with_shrink_divisor(2);
        assert!(matches!(
            DynamicArray::<u8>::with_config(config),
            Err(ConfigError::ShrinkDivisorTooSmall { .. })
        ));
    }

    #[test]
    fn unrepresentable_initial_capacity_rejected() {
        let config = ArrayConfig::new().with_initial_capacity(usize::MAX);
        assert_eq!(
            DynamicArray::<u64>::with_config(config.clone()).err(),
            Some(ConfigError::InitialCapacityOverflow {
                requested: usize::MAX
            })
        );
        // Zero-sized elements never need memory, whatever the count.
        let units = DynamicArray::<()>::with_config(config).unwrap();
        assert_eq!(units.max_size(), usize::MAX);
    }

    #[test]
    fn has_element_scans_live_prefix_only() {
        let mut arr = filled(&[4, 5, 6]);
        arr.erase(2).unwrap();
        assert!(arr.has_element(&5));
        assert!(!arr.has_element(&6));
        let empty: DynamicArray<i32> = DynamicArray::new();
        assert!(!empty.has_element(&0));
    }

    #[test]
    fn alternating_insert_erase_at_boundary_is_stable() {
        let mut arr = filled(&[1, 2, 3, 4]);
        assert_eq!(arr.max_size(), 4);
        arr.push_back(5);
        assert_eq!(arr.max_size(), 8);
        for _ in 0..10 {
            arr.erase(4).unwrap();
            assert_eq!(arr.max_size(), 8);
            arr.push_back(5);
            assert_eq!(arr.max_size(), 8);
        }
    }

    #[test]
    fn out_of_range_boundaries() {
        let mut arr: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(
            arr.at(0),
            Err(SeqError::OutOfRange {
                op: SeqOp::At,
                index: 0,
                len: 0
            })
        );
        assert!(arr.erase(0).is_err());
        assert!(arr.insert(1, 5).is_err());
        assert!(arr.insert(0, 5).is_ok());

        assert!(arr.at(1).is_err());
        assert!(arr.at_mut(1).is_err());
        assert!(matches!(
            arr.erase(1),
            Err(SeqError::OutOfRange { op: SeqOp::Erase, index: 1, len: 1 })
        ));
        assert!(arr.insert(2, 5).is_err());
        assert_eq!(arr.size(), 1);
    }

    #[test]
    fn at_mut_writes_through() {
        let mut arr = filled(&[1, 2, 3]);
        *arr.at_mut(1).unwrap() = 20;
        arr[2] += 10;
        assert_eq!(arr.as_slice(), &[1, 20, 13]);
        assert_eq!(arr[0], 1);
    }

    #[test]
    #[should_panic(expected = "at: index 3 out of range for length 3")]
    fn index_operator_panics_out_of_range() {
        let arr = filled(&[1, 2, 3]);
        let _ = arr[3];
    }

    #[test]
    fn clone_is_deep_and_equal() {
        let original = DynamicArray::with_len(3, vec![1u8]);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        copy.at_mut(0).unwrap().push(2);
        assert_ne!(copy, original);
        assert_eq!(copy.max_size(), original.max_size());
    }

    #[test]
    fn debug_renders_elements_in_order() {
        let arr = filled(&[3, 1, 2]);
        assert_eq!(format!("{arr:?}"), "[3, 1, 2]");
    }

    #[test]
    fn erase_hands_back_ownership_and_drop_releases_rest() {
        struct Counted(Rc<Cell<usize>>);
        impl Drop for Counted {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        let mut arr = DynamicArray::new();
        for _ in 0..6 {
            arr.push_back(Counted(Rc::clone(&drops)));
        }
        let taken = arr.erase(2).unwrap();
        assert_eq!(drops.get(), 0);
        drop(taken);
        assert_eq!(drops.get(), 1);
        drop(arr);
        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn works_through_sequence_trait() {
        fn fill<S: Sequence<i32>>(seq: &mut S) {
            seq.push_back(1);
            seq.insert(0, 0).unwrap();
        }
        let mut arr = DynamicArray::new();
        fill(&mut arr);
        assert_eq!(Sequence::size(&arr), 2);
        assert_eq!(Sequence::at(&arr, 0), Ok(&0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Push(i32),
            Insert(usize, i32),
            Erase(usize),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<i32>().prop_map(Op::Push),
                (0usize..64, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
                (0usize..64).prop_map(Op::Erase),
            ]
        }

        proptest! {
            #[test]
            fn matches_vec_model_and_keeps_capacity_invariant(
                ops in proptest::collection::vec(op(), 0..200),
            ) {
                let mut arr = DynamicArray::new();
                let mut model: Vec<i32> = Vec::new();
                for op in ops {
                    let before = arr.max_size();
                    match op {
                        Op::Push(v) => {
                            arr.push_back(v);
                            model.push(v);
                        }
                        Op::Insert(i, v) => {
                            let i = i % (model.len() + 1);
                            arr.insert(i, v).unwrap();
                            model.insert(i, v);
                        }
                        Op::Erase(i) => {
                            if model.is_empty() {
                                prop_assert!(arr.erase(i).is_err());
                            } else {
                                let i = i % model.len();
                                prop_assert_eq!(arr.erase(i).unwrap(), model.remove(i));
                            }
                        }
                    }
                    let after = arr.max_size();
                    prop_assert!(arr.size() <= after);
                    prop_assert!(
                        after == before
                            || after == before * 2
                            || (before == 0 && after == 1)
                            || after == before / 2
                    );
                    if after < before {
                        prop_assert!(arr.size() * 4 <= before);
                    }
                    prop_assert_eq!(arr.as_slice(), model.as_slice());
                }
            }

            #[test]
            fn insert_then_reverse_erase_round_trips(
                base in proptest::collection::vec(any::<i16>(), 0..32),
                inserts in proptest::collection::vec((0usize..64, any::<i16>()), 0..32),
            ) {
                let mut arr = DynamicArray::new();
                for &v in &base {
                    arr.push_back(v);
                }
                let mut positions = Vec::new();
                for (i, v) in inserts {
                    let i = i % (arr.size() + 1);
                    arr.insert(i, v).unwrap();
                    prop_assert_eq!(arr.at(i), Ok(&v));
                    positions.push(i);
                }
                for &i in positions.iter().rev() {
                    arr.erase(i).unwrap();
                }
                prop_assert_eq!(arr.as_slice(), base.as_slice());
            }
        }
    }
}
