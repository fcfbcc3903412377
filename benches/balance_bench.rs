//! Criterion benchmarks for u-balance selection.
//!
//! Measures the per-call cost of SWRR selection as the pool grows, and
//! under contention from several threads sharing one scheduler.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rayon::prelude::*;
use u_balance::swrr::{SmoothWeightedRoundRobin, WeightedNode};

fn pool_of(n: usize) -> SmoothWeightedRoundRobin<WeightedNode<usize>> {
    (0..n)
        .map(|i| WeightedNode::new(format!("node-{i}"), (i % 7 + 1) as i64, i))
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("swrr_select");

    for &n in &[4usize, 64, 1024] {
        let pool = pool_of(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &pool, |b, p| {
            b.iter(|| black_box(p.select()))
        });
    }
    group.finish();
}

fn bench_select_with(c: &mut Criterion) {
    let mut group = c.benchmark_group("swrr_select_with");

    for &n in &[4usize, 64, 1024] {
        let pool = pool_of(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &pool, |b, p| {
            b.iter(|| black_box(p.select_with(|node| *node.value())))
        });
    }
    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("swrr_contended");
    group.sample_size(10);

    let pool = pool_of(64);
    for &calls in &[1_000usize, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(calls), &calls, |b, &calls| {
            b.iter(|| {
                let hits = (0..calls)
                    .into_par_iter()
                    .filter(|_| pool.select().is_some())
                    .count();
                black_box(hits)
            })
        });
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let pool = pool_of(64);
    c.bench_function("swrr_add_remove", |b| {
        b.iter(|| {
            pool.add(WeightedNode::new("transient", 3, usize::MAX));
            pool.remove(black_box("transient"));
        })
    });
}

criterion_group!(
    benches,
    bench_select,
    bench_select_with,
    bench_contended,
    bench_churn
);
criterion_main!(benches);
