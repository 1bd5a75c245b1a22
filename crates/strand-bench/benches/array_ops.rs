//! Criterion micro-benchmarks for DynamicArray append, indexed access,
//! front insertion and boundary churn.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use strand_array::{ArrayConfig, DynamicArray};
use strand_bench::{churn, fill, index_pattern, sum_at};

/// Benchmark: 10K appends into a fresh array (amortized doubling).
fn bench_push_back_10k(c: &mut Criterion) {
    c.bench_function("array_push_back_10k", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::new();
            fill(&mut arr, 10_000);
            black_box(arr.max_size());
        });
    });
}

/// Benchmark: 10K appends into an array preallocated to fit.
fn bench_push_back_10k_preallocated(c: &mut Criterion) {
    let config = ArrayConfig::new().with_initial_capacity(10_000);
    c.bench_function("array_push_back_10k_preallocated", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::with_config(config.clone()).unwrap();
            fill(&mut arr, 10_000);
            black_box(arr.size());
        });
    });
}

/// Benchmark: 1K scattered reads from a 10K array.
fn bench_at_scattered(c: &mut Criterion) {
    let mut arr = DynamicArray::new();
    fill(&mut arr, 10_000);
    let idx = index_pattern(10_000, 1_000);
    c.bench_function("array_at_scattered_1k", |b| {
        b.iter(|| black_box(sum_at(&arr, &idx).unwrap()));
    });
}

/// Benchmark: insert at index 0 of a 1K array (shifts every element).
fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("array_insert_front_1k", |b| {
        b.iter_batched(
            || {
                let mut arr = DynamicArray::new();
                fill(&mut arr, 1_000);
                arr
            },
            |mut arr| {
                arr.insert(0, 42).unwrap();
                black_box(arr)
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: 1K insert/erase pairs at the grow boundary.
fn bench_boundary_churn(c: &mut Criterion) {
    let mut arr = DynamicArray::new();
    fill(&mut arr, 1_024);
    c.bench_function("array_boundary_churn_1k", |b| {
        b.iter(|| black_box(churn(&mut arr, 1_000).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_push_back_10k,
    bench_push_back_10k_preallocated,
    bench_at_scattered,
    bench_insert_front,
    bench_boundary_churn
);
criterion_main!(benches);
