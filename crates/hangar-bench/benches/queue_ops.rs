//! Criterion micro-benchmarks for the circular queue.

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hangar::prelude::*;
use hangar_bench::{churn_profile, replay_queue, steady_profile};
use hangar_test_utils::Op;

/// Benchmark: 10K adds from empty, including every grow.
fn bench_queue_fill_10k(c: &mut Criterion) {
    c.bench_function("queue_fill_10k", |b| {
        b.iter(|| {
            let mut q: CircularQueue<u64> = CircularQueue::new();
            for i in 0..10_000u64 {
                q.add(i).unwrap();
            }
            black_box(q.capacity());
        });
    });
}

/// Benchmark: add/remove pairs on a queue whose cursors wrap constantly.
fn bench_queue_wrap(c: &mut Criterion) {
    let mut q: CircularQueue<u64> = CircularQueue::new();
    for i in 0..6u64 {
        q.add(i).unwrap();
    }
    let mut i = 6u64;
    c.bench_function("queue_wrap", |b| {
        b.iter(|| {
            q.add(i).unwrap();
            black_box(q.remove());
            i += 1;
        });
    });
}

/// Benchmark: 100K-step mixed script, with `VecDeque` as the baseline.
fn bench_queue_steady(c: &mut Criterion) {
    let ops = steady_profile(42, 100_000);
    let mut group = c.benchmark_group("queue_steady_100k");
    group.bench_function("hangar", |b| {
        b.iter(|| {
            let mut q = CircularQueue::new();
            black_box(replay_queue(&ops, &mut q).unwrap());
        });
    });
    group.bench_function("vecdeque", |b| {
        b.iter(|| {
            let mut q = VecDeque::new();
            let mut sum = 0u64;
            for op in &ops {
                match *op {
                    Op::Insert(v) => q.push_back(v),
                    Op::Remove => {
                        sum = sum.wrapping_add(q.pop_front().unwrap_or(0));
                    }
                    Op::Peek => {
                        sum = sum.wrapping_add(q.front().copied().unwrap_or(0));
                    }
                }
            }
            black_box(sum);
        });
    });
    group.finish();
}

/// Benchmark: fill-then-drain waves, growing and shrinking every wave.
fn bench_queue_churn(c: &mut Criterion) {
    let ops = churn_profile(8);
    c.bench_function("queue_churn_8_waves", |b| {
        b.iter_batched(
            CircularQueue::new,
            |mut q| black_box(replay_queue(&ops, &mut q).unwrap()),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_queue_fill_10k,
    bench_queue_wrap,
    bench_queue_steady,
    bench_queue_churn
);
criterion_main!(benches);
