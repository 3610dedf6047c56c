//! Benchmarks for the cash-flow aggregation kernels.
//!
//! Run with: cargo bench -p accrue-cashflows

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use accrue_cashflows::{future_value_uneven_cash_flows, npv_uneven_cash_flows};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// A mildly irregular flow schedule: no allocation tricks, just enough
/// variation to defeat constant folding.
fn generate_flows(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| 100.0 + (i % 7) as f64 * 13.5 - (i % 3) as f64 * 40.0)
        .collect()
}

fn bench_npv(c: &mut Criterion) {
    let mut group = c.benchmark_group("npv_uneven_cash_flows");

    for size in [16usize, 128, 1024] {
        let flows = generate_flows(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &flows, |b, flows| {
            b.iter(|| npv_uneven_cash_flows(black_box(0.05), black_box(flows)));
        });
    }

    group.finish();
}

fn bench_future_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("future_value_uneven_cash_flows");

    for size in [16usize, 128, 1024] {
        let flows = generate_flows(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &flows, |b, flows| {
            b.iter(|| future_value_uneven_cash_flows(black_box(0.05), black_box(flows)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_npv, bench_future_value);
criterion_main!(benches);
