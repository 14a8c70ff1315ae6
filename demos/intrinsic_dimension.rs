//! Estimate the dimension of flat pieces embedded in 10-D.
//!
//! Run with `RUST_LOG=knndim=debug` to see per-run slopes.

use knndim::{DimensionEstimator, EdgeWeighting, KnnLengthEstimator};
use rand::prelude::*;

fn embedded_cube(n: usize, intrinsic: usize, ambient: usize, rng: &mut StdRng) -> Vec<Vec<f32>> {
    let map: Vec<Vec<f32>> = (0..ambient)
        .map(|_| (0..intrinsic).map(|_| rng.random::<f32>() * 2.0 - 1.0).collect())
        .collect();
    (0..n)
        .map(|_| {
            let z: Vec<f32> = (0..intrinsic).map(|_| rng.random::<f32>()).collect();
            map.iter()
                .map(|row| row.iter().zip(&z).map(|(a, b)| a * b).sum())
                .collect()
        })
        .collect()
}

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let routine = [50, 100, 200, 400, 800];

    println!("=== kNN-length estimator (k=5, 3 runs, 10 resamplings) ===");
    for intrinsic in 1..=4 {
        let data = embedded_cube(800, intrinsic, 10, &mut rng);

        for weighting in [EdgeWeighting::Directed, EdgeWeighting::Undirected] {
            let estimator = KnnLengthEstimator::new()
                .with_n_runs(3)
                .with_weighting(weighting)
                .with_seed(7);
            match estimator.estimate(&data, &routine) {
                Ok(est) => println!(
                    "  true d = {intrinsic}  {weighting:?}: estimate {} (mean {:.2})",
                    est.dimension, est.mean
                ),
                Err(e) => println!("  true d = {intrinsic}  {weighting:?}: error: {e}"),
            }
        }
    }
}
