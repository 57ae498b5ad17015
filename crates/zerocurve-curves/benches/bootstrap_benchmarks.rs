//! Benchmarks for curve bootstrapping.
//!
//! Run with: cargo bench -p zerocurve-curves

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use zerocurve_curves::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn swap_points() -> Vec<RateObservation> {
    [
        (1.0, 0.0480),
        (2.0, 0.0410),
        (3.0, 0.0395),
        (5.0, 0.0400),
        (7.0, 0.0410),
        (10.0, 0.0425),
        (15.0, 0.0438),
        (20.0, 0.0442),
        (30.0, 0.0440),
    ]
    .iter()
    .map(|(t, r)| RateObservation::new(*t, *r, InstrumentSource::Swap).unwrap())
    .collect()
}

fn futures_points() -> Vec<RateObservation> {
    (1..=8)
        .filter_map(|q| {
            let label = format!("{}M", q * 3);
            let price = 94.70 + 0.05 * f64::from(q);
            normalize_futures(&format!("{price:.3}"), &label)
        })
        .collect()
}

fn requests(n: usize) -> Vec<CurveRequest> {
    (0..n)
        .map(|i| {
            CurveRequest::swaps_and_futures(format!("C{i:02}"), swap_points(), futures_points())
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_methods(c: &mut Criterion) {
    let engine = BootstrapEngine::default();
    let point_sets = [swap_points(), futures_points()];
    let input = engine.assemble(&point_sets).unwrap();

    let mut group = c.benchmark_group("bootstrap");
    for method in BootstrapMethod::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(method), &method, |b, &method| {
            b.iter(|| engine.bootstrap(black_box(&input), method, "USD"));
        });
    }
    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let point_sets = [swap_points(), futures_points()];
    c.bench_function("assemble", |b| b.iter(|| assemble(black_box(&point_sets))));
}

fn bench_batch(c: &mut Criterion) {
    let engine = BootstrapEngine::default();
    let mut group = c.benchmark_group("build_all");
    for n in [4, 16, 64] {
        let batch = requests(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &batch, |b, batch| {
            b.iter(|| build_all(&engine, black_box(batch), BootstrapMethod::QlLogCubic));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_methods, bench_assemble, bench_batch);
criterion_main!(benches);
