//! Intrinsic dimension estimation from kNN-graph lengths.
//!
//! Data that lives in a high-dimensional ambient space often lies near a much
//! lower-dimensional set: a plane, a curve, a manifold. The *intrinsic
//! dimension* is the dimension of that set.
//!
//! ## Graph Length Scaling
//!
//! Take `n` random points from a d-dimensional set and connect each one to its
//! `k` nearest neighbors. Typical neighbor distances shrink like `n^(-1/d)`, so
//! the total edge length behaves like
//!
//! ```text
//! L(n) ∝ n · n^(-1/d) = n^((d - 1) / d)
//! ```
//!
//! Measuring `L(n)` at several sample sizes and fitting a line in log-log space
//! recovers the exponent, and from it `d`. Like correlation dimension, this
//! reads dimension off a power law in pairwise-distance statistics rather than
//! off the coordinates.
//!
//! **Assumptions**:
//! - Points are sampled roughly uniformly from the underlying set
//! - Sample sizes are large enough that boundary effects are small
//! - Noise is small relative to typical neighbor distances
//!
//! ## Pieces
//!
//! - [`KnnGraph`]: brute-force directed kNN graph with Euclidean weights
//! - [`mean_sample_length`]: average graph length of random subsamples
//! - [`fit_line`]: least-squares line for the log-log fit
//! - [`KnnLengthEstimator`] / [`estimate_dimension`]: the full estimator
//!
//! ## Usage
//!
//! ```rust
//! use knndim::estimate::{DimensionEstimator, KnnLengthEstimator};
//!
//! // A 10 x 10 grid lying in the plane z = x + y.
//! let data: Vec<Vec<f32>> = (0..100)
//!     .map(|i| {
//!         let (x, y) = ((i % 10) as f32, (i / 10) as f32);
//!         vec![x, y, x + y]
//!     })
//!     .collect();
//!
//! let estimate = KnnLengthEstimator::new()
//!     .with_n_runs(2)
//!     .with_seed(42)
//!     .estimate(&data, &[25, 50, 100])
//!     .unwrap();
//! assert_eq!(estimate.runs.len(), 2);
//! ```

mod estimator;
mod knn;
mod regression;
mod sampling;
mod traits;
mod util;

pub use estimator::{estimate_dimension, DimensionEstimate, KnnLengthEstimator, RunEstimate};
pub use knn::{EdgeWeighting, KnnGraph, Neighbor};
pub use regression::{fit_line, LinearFit};
pub use sampling::{mean_sample_length, mean_sample_length_with, SamplingParams};
pub use traits::DimensionEstimator;
