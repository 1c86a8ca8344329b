//! Criterion benchmarks for the drone simulations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hangar_test_utils::{clean_sword_times, item_retrieval_times};

/// Benchmark: 20 swords serving 10K requests one tick apart.
fn bench_clean_swords(c: &mut Criterion) {
    let swords: Vec<u64> = (1..=20).collect();
    let requests: Vec<u64> = (0..10_000).collect();
    c.bench_function("clean_swords_10k", |b| {
        b.iter(|| black_box(clean_sword_times(&swords, &requests, 5).unwrap().len()));
    });
}

/// Benchmark: 10K item requests arriving faster than the drone returns.
fn bench_item_retrieval(c: &mut Criterion) {
    let requests: Vec<u64> = (0..10_000u64).map(|i| i * 3).collect();
    c.bench_function("item_retrieval_10k", |b| {
        b.iter(|| black_box(item_retrieval_times(4, &requests).unwrap().len()));
    });
}

criterion_group!(benches, bench_clean_swords, bench_item_retrieval);
criterion_main!(benches);
