//! Criterion benchmarks for the knapsack solvers.
//!
//! Item sets come from a fixed seed so runs are comparable across commits.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapbench_core::Capacity;
use knapbench_solver::Algorithm;
use knapbench_test::seeded_items;

const SEED: u64 = 42;

fn capacity() -> Capacity {
    Capacity::from_units(100_000)
}

// ===========================================================================
// Exponential solvers
// ===========================================================================

fn bench_exact_small(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_small");
    group.sample_size(10);

    for algorithm in [
        Algorithm::BruteForce,
        Algorithm::Backtracking,
        Algorithm::PrunedBacktracking,
    ] {
        for n in [10, 14, 18] {
            let items = seeded_items(n, SEED);
            group.bench_with_input(BenchmarkId::new(algorithm.to_string(), n), &items, |b, items| {
                b.iter(|| black_box(algorithm.solve(items, capacity())));
            });
        }
    }

    group.finish();
}

// ===========================================================================
// Polynomial solvers
// ===========================================================================

fn bench_polynomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial");
    group.sample_size(10);

    let all = seeded_items(4000, SEED);
    for algorithm in [
        Algorithm::DynamicProgramming,
        Algorithm::Greedy,
        Algorithm::GreedySelectionSort,
    ] {
        for n in [500, 2000, 4000] {
            let items = all.prefix(n);
            group.bench_with_input(BenchmarkId::new(algorithm.to_string(), n), items, |b, items| {
                b.iter(|| black_box(algorithm.solve(items, capacity())));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_exact_small, bench_polynomial);
criterion_main!(benches);
