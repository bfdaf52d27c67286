#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for character plot rendering.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glyphplot::CharPlot;

fn render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("char_plot");

    for size in [100, 1_000, 10_000, 100_000] {
        // Generate random-ish data using deterministic formula
        let y: Vec<f64> = (0..size)
            .map(|i| {
                let t = f64::from(i) / f64::from(size);
                (t * std::f64::consts::TAU).sin() * 50.0 + f64::from(i % 17)
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let plot = CharPlot::new()
                    .y(black_box(&y))
                    .dimensions(120, 15)
                    .build()
                    .unwrap();

                plot.render()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, render_benchmark);
criterion_main!(benches);
