//! Performance benchmarks for the recorded perceptron trainer
//!
//! Run with: cargo bench --bench trainer_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use perceptron_trace::{fit_reference, generate_clusters, train, ClusterConfig, LabeledPoint};

fn separable_points(points_per_class: usize) -> Vec<LabeledPoint> {
    generate_clusters(&ClusterConfig {
        points_per_class,
        center_positive: [3.0, 3.0],
        center_negative: [-3.0, -3.0],
        spread: 0.5,
        seed: 42,
    })
}

/// Benchmark the recorded run at different point counts
fn bench_train(c: &mut Criterion) {
    let mut group = c.benchmark_group("train");

    for size in [20, 100, 500].iter() {
        let points = separable_points(*size);

        group.bench_with_input(BenchmarkId::new("separable", size), size, |b, _| {
            b.iter(|| {
                black_box(train(&points, 1000).unwrap());
            });
        });
    }

    group.finish();
}

/// Benchmark the unrecorded reference fit at different point counts
fn bench_fit_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_reference");

    for size in [20, 100, 500].iter() {
        let points = separable_points(*size);

        group.bench_with_input(BenchmarkId::new("separable", size), size, |b, _| {
            b.iter(|| {
                black_box(fit_reference(&points, 50).unwrap());
            });
        });
    }

    group.finish();
}

/// Benchmark a capped run, where every pass pays for recording
fn bench_capped_train(c: &mut Criterion) {
    let points = vec![
        LabeledPoint::from_xy(1.0, 0.0, perceptron_trace::Label::Positive),
        LabeledPoint::from_xy(1.0, 0.0, perceptron_trace::Label::Negative),
    ];

    c.bench_function("train_capped_500", |b| {
        b.iter(|| {
            black_box(train(&points, 500).unwrap());
        });
    });
}

/// Benchmark cluster synthesis with the default config
fn bench_generate_clusters(c: &mut Criterion) {
    c.bench_function("generate_clusters_default", |b| {
        b.iter(|| {
            black_box(generate_clusters(&ClusterConfig::default()));
        });
    });
}

criterion_group!(
    benches,
    bench_train,
    bench_fit_reference,
    bench_capped_train,
    bench_generate_clusters
);
criterion_main!(benches);
