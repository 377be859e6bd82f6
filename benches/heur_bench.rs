//! Criterion benchmarks for the search strategies.
//!
//! Budgets are fixed per group; larger instances rarely reach their
//! target, so timings mostly reflect full-budget runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_heurbench::airship::{PeakSearch, PeakSearchConfig};
use u_heurbench::fsa::{FsaConfig, FsaRunner};
use u_heurbench::go::{GoConfig, GoRunner};
use u_heurbench::objfun::{AirShip, Terrain, TspGrid, Zebra3};
use u_heurbench::sg::{SgConfig, SgRunner};

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_sg_zebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("sg_zebra");
    group.sample_size(10);

    for &blocks in &[10usize, 30, 60] {
        let zebra = Zebra3::new(blocks).expect("valid block count");
        let config = SgConfig::default()
            .with_max_evaluations(5_000)
            .with_unbounded_descent()
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(blocks),
            &(zebra, config),
            |b, (of, c)| {
                b.iter(|| {
                    let result = SgRunner::run(black_box(of), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_fsa_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("fsa_tsp");
    group.sample_size(10);

    for (w, h) in [(4usize, 4usize), (6, 6), (10, 10)] {
        let tsp = TspGrid::new(w, h).expect("valid grid");
        let config = FsaConfig::default()
            .with_max_evaluations(10_000)
            .with_radius(1.0)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("{}x{}", w, h), w * h),
            &(tsp, config),
            |b, (of, c)| {
                b.iter(|| {
                    let result = FsaRunner::run(black_box(of), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_go_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("go_tsp");
    group.sample_size(10);

    for (n, m) in [(10usize, 100usize), (30, 300)] {
        let tsp = TspGrid::new(6, 6).expect("valid grid");
        let config = GoConfig::default()
            .with_max_evaluations(10_000)
            .with_population_size(n)
            .with_pool_size(m)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_m{}", n, m), n),
            &(tsp, config),
            |b, (of, c)| {
                b.iter(|| {
                    let result = GoRunner::run(black_box(of), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_air_ship(c: &mut Criterion) {
    let mut group = c.benchmark_group("air_ship");

    group.bench_function("sg_hmax_10", |b| {
        let ship = AirShip::new().with_fstar(-1_000.0);
        let config = SgConfig::default()
            .with_max_evaluations(1_000)
            .with_hmax(10)
            .with_seed(42);
        b.iter(|| black_box(SgRunner::run(black_box(&ship), black_box(&config))))
    });

    group.bench_function("peak_search", |b| {
        let terrain = Terrain::air_ship();
        let config = PeakSearchConfig::default().with_seed(42);
        b.iter(|| black_box(PeakSearch::run(black_box(&terrain), black_box(&config))))
    });
    group.finish();
}

criterion_group!(benches, bench_sg_zebra, bench_fsa_tsp, bench_go_tsp, bench_air_ship);
criterion_main!(benches);
