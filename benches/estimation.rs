use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knndim::{mean_sample_length, DimensionEstimator, KnnGraph, KnnLengthEstimator};
use rand::prelude::*;

fn synthetic(n: usize, d: usize) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| (0..d).map(|_| rng.random::<f32>()).collect())
        .collect()
}

fn bench_knn_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("knn_graph");
    let data = synthetic(500, 16);

    group.bench_function("build_n500_d16_k5", |b| {
        b.iter(|| KnnGraph::build(black_box(&data), 5).unwrap())
    });

    group.finish();
}

fn bench_estimation(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimation");
    let data = synthetic(1000, 8);

    group.bench_function("mean_sample_length_n200_r10", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| mean_sample_length(black_box(&data), 200, 5, 10, &mut rng).unwrap())
    });

    group.bench_function("estimate_routine4_r5", |b| {
        let est = KnnLengthEstimator::new().with_n_resamplings(5).with_seed(1);
        b.iter(|| est.estimate(black_box(&data), &[50, 100, 200, 400]).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_knn_graph, bench_estimation);
criterion_main!(benches);
