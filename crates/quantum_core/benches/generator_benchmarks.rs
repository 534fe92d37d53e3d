//! Criterion benchmarks for quantum_core.
//!
//! Benchmarks cover:
//! - Table construction at default and reduced shapes
//! - Stream sampling (`next`) throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quantum_core::{EntangledStreamGenerator, StreamParams};

/// Benchmark table construction (normal draws plus per-dimension sort).
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.sample_size(10);

    for samples in [101, 1001] {
        let params = StreamParams::builder()
            .samples(samples)
            .build()
            .expect("valid parameters");
        group.bench_with_input(
            BenchmarkId::new("samples_per_dimension", samples),
            &params,
            |b, &params| {
                b.iter(|| EntangledStreamGenerator::with_params(black_box(42), params));
            },
        );
    }

    group.finish();
}

/// Benchmark draws from an already-built generator.
fn bench_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("next");
    let mut generator = EntangledStreamGenerator::new(Some(42));

    for n in [1, 100, 3 * 80 * 40] {
        group.bench_with_input(BenchmarkId::new("values", n), &n, |b, &n| {
            b.iter(|| {
                let mut sum = 0.0;
                for _ in 0..n {
                    sum += generator.next();
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_next);
criterion_main!(benches);
