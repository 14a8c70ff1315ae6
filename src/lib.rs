//! Intrinsic dimension estimation.
//!
//! `knndim` estimates how many dimensions a point cloud really occupies, from
//! the way the total length of its k-nearest-neighbor graph grows with sample
//! size.
//!
//! The primary public API is under [`estimate`], which provides:
//! - [`estimate_dimension`]: one-call integer estimate
//! - [`KnnLengthEstimator`]: configurable estimator with per-run diagnostics
//! - [`mean_sample_length`]: the resampled kNN-graph length it is built on
//!
//! All randomness comes from a caller-supplied generator or an explicit seed.

#![forbid(unsafe_code)]

pub mod error;
pub mod estimate;

pub use error::{Error, Result};
pub use estimate::{
    estimate_dimension, fit_line, mean_sample_length, mean_sample_length_with, DimensionEstimate,
    DimensionEstimator, EdgeWeighting, KnnGraph, KnnLengthEstimator, LinearFit, Neighbor,
    RunEstimate, SamplingParams,
};
