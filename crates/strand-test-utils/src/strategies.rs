//! Proptest strategies for operation scripts.

use proptest::prelude::*;

use crate::model::Step;

/// A single step over small `i32` values.
///
/// Indices range up to `max_index`, well past the lengths a short script
/// reaches, so roughly as many out-of-range steps are generated as valid
/// ones early on. Values are drawn from a small domain so that
/// `HasElement` finds hits as well as misses.
pub fn step(max_index: usize) -> impl Strategy<Value = Step<i32>> {
    let value = -8i32..8;
    prop_oneof![
        3 => value.clone().prop_map(Step::PushBack),
        3 => (0..=max_index, value.clone()).prop_map(|(i, v)| Step::Insert(i, v)),
        2 => (0..=max_index).prop_map(Step::Erase),
        1 => (0..=max_index).prop_map(Step::At),
        1 => value.prop_map(Step::HasElement),
    ]
}

/// A script of up to `max_steps` steps.
pub fn script(max_steps: usize, max_index: usize) -> impl Strategy<Value = Vec<Step<i32>>> {
    proptest::collection::vec(step(max_index), 0..=max_steps)
}

/// A script that only grows the container: appends and in-range inserts
/// expressed as fractions of the current length.
pub fn growth_script(max_steps: usize) -> impl Strategy<Value = Vec<(u8, i32)>> {
    proptest::collection::vec((any::<u8>(), any::<i32>()), 0..=max_steps)
}

/// Map a fraction byte to a valid insertion index for `len`.
pub fn scaled_index(fraction: u8, len: usize) -> usize {
    (fraction as usize * (len + 1)) / 256
}
