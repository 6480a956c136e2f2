//! Criterion benchmarks for every removal strategy across a size sweep.
//!
//! Each batch gets a freshly populated world; the pruned world is
//! returned from the routine so its deallocation happens outside the
//! timed region.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use cull_bench::Sweep;
use cull_core::{World, DEFAULT_SEED};
use cull_strategy::Strategy;

/// Geometric sweep so the quadratic erase strategies finish in
/// reasonable time at the top end.
const SWEEP: Sweep = Sweep::Multiplicative {
    start: 1_000,
    end: 256_000,
    multiplier: 4,
};

fn populated(size: usize) -> World {
    let mut world = World::new();
    world
        .populate(size, DEFAULT_SEED)
        .expect("benchmark sizes are representable");
    world
}

fn bench_removal(c: &mut Criterion) {
    let sizes = SWEEP.sizes().expect("benchmark sweep is valid");
    let mut group = c.benchmark_group("remove_dead_entities");
    group.sample_size(10);

    for strategy in Strategy::ALL {
        for &size in &sizes {
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &size, |b, &size| {
                b.iter_batched(
                    || populated(size),
                    |mut world| {
                        strategy.prune(black_box(&mut world));
                        world
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("populate");
    for size in [10_000usize, 100_000, 250_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(populated(size)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_removal, bench_populate);
criterion_main!(benches);
