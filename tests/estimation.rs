use knndim::{
    estimate_dimension, mean_sample_length, DimensionEstimator, Error, KnnLengthEstimator,
};
use rand::prelude::*;

/// `n` points uniform in the unit `intrinsic`-cube, pushed into `ambient`
/// dimensions by a random linear map.
fn embedded_cube(n: usize, intrinsic: usize, ambient: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
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

#[test]
fn plane_in_five_dimensions() {
    let data = embedded_cube(200, 2, 5, 7);
    let mut rng = StdRng::seed_from_u64(42);

    let d = estimate_dimension(&data, &[20, 40, 80, 160], 5, 3, 20, &mut rng).unwrap();
    assert!((1..=3).contains(&d), "expected about 2, got {d}");
}

#[test]
fn line_in_four_dimensions() {
    let data = embedded_cube(300, 1, 4, 11);
    let est = KnnLengthEstimator::new()
        .with_n_runs(2)
        .with_n_resamplings(10)
        .with_seed(3)
        .estimate(&data, &[30, 60, 120, 240])
        .unwrap();

    assert!((0..=2).contains(&est.dimension), "expected about 1, got {}", est.dimension);
}

#[test]
fn same_seed_same_estimate() {
    let data = embedded_cube(150, 2, 3, 1);
    let routine = [20, 40, 80];

    let a = estimate_dimension(&data, &routine, 5, 2, 5, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = estimate_dimension(&data, &routine, 5, 2, 5, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);

    let est = KnnLengthEstimator::new().with_n_runs(2).with_n_resamplings(5).with_seed(99);
    assert_eq!(
        est.estimate_dimension(&data, &routine).unwrap(),
        est.estimate_dimension(&data, &routine).unwrap()
    );
}

#[test]
fn mean_length_grows_with_sample_size() {
    let data = embedded_cube(200, 2, 5, 5);
    let mut rng = StdRng::seed_from_u64(8);

    let small = mean_sample_length(&data, 20, 5, 20, &mut rng).unwrap();
    let large = mean_sample_length(&data, 150, 5, 20, &mut rng).unwrap();
    assert!(small > 0.0);
    assert!(large > small, "L(150) = {large} should exceed L(20) = {small}");
}

#[test]
fn three_points_cannot_have_five_neighbors() {
    let data = embedded_cube(50, 2, 3, 2);
    let mut rng = StdRng::seed_from_u64(0);

    let result = mean_sample_length(&data, 3, 5, 10, &mut rng);
    assert!(matches!(
        result,
        Err(Error::SampleTooSmall {
            requested: 3,
            n_neighbors: 5
        })
    ));
}

#[test]
fn single_sample_size_is_underdetermined() {
    let data = embedded_cube(100, 2, 3, 2);
    let mut rng = StdRng::seed_from_u64(0);

    let result = estimate_dimension(&data, &[50], 5, 1, 10, &mut rng);
    assert!(matches!(result, Err(Error::Underdetermined { distinct: 1 })));
}

#[test]
fn errors_render_readably() {
    let err = Error::SampleTooLarge {
        requested: 10,
        n_items: 4,
    };
    assert_eq!(err.to_string(), "sample size 10 exceeds dataset size 4");
}
