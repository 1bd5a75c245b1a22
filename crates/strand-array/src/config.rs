//! Capacity policy parameters.

use crate::error::ConfigError;

/// Capacity policy for a [`DynamicArray`](crate::DynamicArray).
///
/// Growth is fixed (doubling, or a single slot from empty). The shrink
/// side is tunable: when to halve, and how small the buffer may get.
/// Validated by [`DynamicArray::with_config`](crate::DynamicArray::with_config);
/// immutable for the lifetime of the array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Slots allocated by an empty constructor.
    ///
    /// Default: 0 (no allocation until the first insertion).
    pub initial_capacity: usize,

    /// Capacity the shrink policy never halves below.
    ///
    /// Default: 1. Only constrains shrinking; an array may be created
    /// with a smaller initial capacity.
    pub min_capacity: usize,

    /// Shrink when `len * shrink_divisor <= capacity` after an erase.
    ///
    /// Default: 4 (utilization at or below one quarter). Must be at
    /// least 3, otherwise a halved buffer could already be full and the
    /// next insertion would grow it straight back.
    pub shrink_divisor: usize,
}

impl ArrayConfig {
    /// Default slots allocated by an empty constructor.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Default shrink floor.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Default shrink threshold divisor (quarter utilization).
    pub const DEFAULT_SHRINK_DIVISOR: usize = 4;

    /// Smallest divisor that leaves room after halving.
    pub const MIN_SHRINK_DIVISOR: usize = 3;

    /// Create a config with the default policy.
    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            shrink_divisor: Self::DEFAULT_SHRINK_DIVISOR,
        }
    }

    /// Same policy, different initial capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Same policy, different shrink floor.
    pub fn with_min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    /// Same policy, different shrink threshold.
    pub fn with_shrink_divisor(mut self, shrink_divisor: usize) -> Self {
        self.shrink_divisor = shrink_divisor;
        self
    }

    /// Check that the policy cannot oscillate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shrink_divisor < Self::MIN_SHRINK_DIVISOR {
            return Err(ConfigError::ShrinkDivisorTooSmall {
                divisor: self.shrink_divisor,
                minimum: Self::MIN_SHRINK_DIVISOR,
            });
        }
        Ok(())
    }

    /// Whether an array of `len` elements in `capacity` slots is sparse
    /// enough to halve.
    pub(crate) fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        let half = capacity / 2;
        if half < self.min_capacity {
            return false;
        }
        // An overflowing product means the array is nowhere near sparse.
        match len.checked_mul(self.shrink_divisor) {
            Some(scaled) => scaled <= capacity,
            None => false,
        }
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}
