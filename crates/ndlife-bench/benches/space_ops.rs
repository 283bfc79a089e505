//! Criterion micro-benchmarks for torus and neighbour-cache operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ndlife_core::{CellSet, Coord};
use ndlife_space::{neighbour_offsets, NeighbourCache, Torus};
use smallvec::smallvec;

/// Benchmark: generate the 728 offsets of a 6-D neighbourhood.
fn bench_offsets_6d(c: &mut Criterion) {
    c.bench_function("offsets_6d", |b| {
        b.iter(|| black_box(neighbour_offsets(black_box(6))));
    });
}

/// Benchmark: wrap every offset around one corner cell of a 4-D torus.
fn bench_wrap_4d(c: &mut Criterion) {
    let torus = Torus::new(&[5, 5, 10, 20]).unwrap();
    let offsets = neighbour_offsets(4);
    let corner: Coord = smallvec![0, 0, 0, 0];

    c.bench_function("wrap_4d_corner", |b| {
        b.iter(|| {
            for o in &offsets {
                black_box(torus.wrap(&corner, o));
            }
        });
    });
}

/// Benchmark: fill neighbour lists for every cell of a 4-D torus.
fn bench_cache_fill_4d(c: &mut Criterion) {
    let torus = Torus::new(&[5, 5, 10, 20]).unwrap();
    let all = torus.canonical_ordering();

    c.bench_function("cache_fill_4d_5k", |b| {
        b.iter(|| {
            let mut cache = NeighbourCache::new(torus.clone());
            for coord in &all {
                black_box(cache.neighbours_of(coord).len());
            }
        });
    });
}

/// Benchmark: full count vs capped count over a half-full 4-D world.
fn bench_count_paths_4d(c: &mut Criterion) {
    let torus = Torus::new(&[5, 5, 10, 20]).unwrap();
    let all = torus.canonical_ordering();
    let live: CellSet = all.iter().step_by(2).cloned().collect();
    let mut cache = NeighbourCache::new(torus);
    for coord in &all {
        cache.neighbours_of(coord);
    }

    let mut group = c.benchmark_group("count_4d_5k");
    group.bench_function("full", |b| {
        b.iter(|| {
            for coord in &all {
                black_box(cache.count_live(coord, &live));
            }
        });
    });
    group.bench_function("capped_29", |b| {
        b.iter(|| {
            for coord in &all {
                black_box(cache.count_live_capped(coord, &live, 29));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_offsets_6d,
    bench_wrap_4d,
    bench_cache_fill_4d,
    bench_count_paths_4d
);
criterion_main!(benches);
