//! Benchmark workloads for the Strand containers.
//!
//! Provides deterministic workloads shared by the criterion benches so
//! that the array and the list are measured on identical operation
//! streams:
//!
//! - [`fill`]: `n` appends into any [`Sequence`]
//! - [`churn`]: alternating insert/erase at the front, at the grow/shrink
//!   boundary of the array's capacity policy
//! - [`index_pattern`]: a fixed pseudo-random walk over valid indices

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strand_core::{SeqError, Sequence};

/// Append `0..n` to `seq`.
pub fn fill<S: Sequence<u64>>(seq: &mut S, n: u64) {
    for v in 0..n {
        seq.push_back(v);
    }
}

/// Insert then erase at index 0, `rounds` times.
///
/// Size returns to where it started; the array's capacity must not move
/// either once the first round has settled it.
pub fn churn<S: Sequence<u64>>(seq: &mut S, rounds: usize) -> Result<u64, SeqError> {
    let mut acc = 0;
    for r in 0..rounds {
        seq.insert(0, r as u64)?;
        acc ^= seq.erase(0)?;
    }
    Ok(acc)
}

/// `count` indices in `0..len`, spread with a fixed multiplicative step.
pub fn index_pattern(len: usize, count: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    (0..count).map(|k| (k.wrapping_mul(7919) + 13) % len).collect()
}

/// Sum the elements at `indices`.
pub fn sum_at<S: Sequence<u64>>(seq: &S, indices: &[usize]) -> Result<u64, SeqError> {
    let mut total = 0u64;
    for &i in indices {
        total = total.wrapping_add(*seq.at(i)?);
    }
    Ok(total)
}
