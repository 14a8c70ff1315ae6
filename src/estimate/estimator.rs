//! Global dimension from the growth of kNN-graph length.
//!
//! # The Estimator
//!
//! For points drawn from a d-dimensional set, the total edge length of the kNN
//! graph on `n` random points grows like
//!
//! ```text
//! L(n) ≈ c · n^m,    m = (d - 1) / d
//! ```
//!
//! so a least-squares line through `(ln n, ln L(n))` over a routine of sample
//! sizes gives the exponent `m`, and
//!
//! ```text
//! d = 1 / (1 - m)
//! ```
//!
//! Each run refits on fresh subsamples; the per-run estimates are averaged and
//! rounded half to even.
//!
//! ## Choosing a Routine
//!
//! - At least two distinct sizes, each in `[n_neighbors + 1, N]`.
//! - Geometric spacing (e.g. 50, 100, 200, 400) spreads the points evenly on
//!   the log axis.
//! - Small sizes suffer boundary effects that flatten the slope, so very small
//!   routines underestimate.
//!
//! ## References
//!
//! Costa, J. A., Hero, A. O. (2004). "Geodesic entropic graphs for dimension and
//! entropy estimation in manifold learning." IEEE Trans. Signal Processing.

use std::collections::BTreeSet;

use log::debug;
use rand::prelude::*;

use super::knn::EdgeWeighting;
use super::regression::{self, LinearFit};
use super::sampling::{self, SamplingParams};
use super::traits::DimensionEstimator;
use super::util;
use crate::error::{Error, Result};

/// kNN-graph-length dimension estimator.
#[derive(Debug, Clone)]
pub struct KnnLengthEstimator {
    sampling: SamplingParams,
    n_runs: usize,
    seed: Option<u64>,
}

/// Outcome of one regression run.
#[derive(Debug, Clone)]
pub struct RunEstimate {
    /// Fit of `ln L(n)` against `ln n`.
    pub fit: LinearFit,
    /// `ln L(n)` for each routine entry, in routine order.
    pub log_lengths: Vec<f64>,
    /// `1 / (1 - slope)`.
    pub dimension: f64,
}

/// Result of [`KnnLengthEstimator::estimate`].
#[derive(Debug, Clone)]
pub struct DimensionEstimate {
    /// Mean of the per-run estimates, rounded half to even.
    pub dimension: i64,
    /// Mean of the per-run estimates.
    pub mean: f64,
    /// `ln n` for each routine entry.
    pub log_sizes: Vec<f64>,
    /// One entry per run.
    pub runs: Vec<RunEstimate>,
}

impl KnnLengthEstimator {
    /// Create an estimator with default parameters.
    ///
    /// Defaults: `n_neighbors = 5`, `n_runs = 1`, `n_resamplings = 10`,
    /// directed edge weighting, unseeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighbor count of each kNN graph.
    pub fn with_n_neighbors(mut self, n_neighbors: usize) -> Self {
        self.sampling.n_neighbors = n_neighbors;
        self
    }

    /// Set the number of independent regression runs.
    pub fn with_n_runs(mut self, n_runs: usize) -> Self {
        self.n_runs = n_runs;
        self
    }

    /// Set the number of subsamples averaged per sample size.
    pub fn with_n_resamplings(mut self, n_resamplings: usize) -> Self {
        self.sampling.n_resamplings = n_resamplings;
        self
    }

    /// Set how graph edge lengths are totalled.
    pub fn with_weighting(mut self, weighting: EdgeWeighting) -> Self {
        self.sampling.weighting = weighting;
        self
    }

    /// Seed the internal RNG for reproducible estimates.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Estimate using randomness from `rng` instead of the configured seed.
    pub fn estimate_with_rng<R: Rng + ?Sized>(
        &self,
        data: &[Vec<f32>],
        routine: &[usize],
        rng: &mut R,
    ) -> Result<DimensionEstimate> {
        if self.n_runs == 0 {
            return Err(Error::InvalidParameter {
                name: "n_runs",
                message: "must be at least 1",
            });
        }
        self.sampling.validate()?;
        util::validate_dataset(data)?;

        let distinct = routine.iter().collect::<BTreeSet<_>>().len();
        if distinct < 2 {
            return Err(Error::Underdetermined { distinct });
        }
        for &n_points in routine {
            self.sampling.check_sample_size(n_points, data.len())?;
        }

        let log_sizes: Vec<f64> = routine.iter().map(|&n| (n as f64).ln()).collect();

        let mut runs = Vec::with_capacity(self.n_runs);
        for run in 0..self.n_runs {
            let mut log_lengths = Vec::with_capacity(routine.len());
            for &n_points in routine {
                let length = sampling::mean_length_unchecked(data, n_points, &self.sampling, rng)?;
                if length <= 0.0 {
                    return Err(Error::DegenerateLength { n_points });
                }
                log_lengths.push(length.ln());
            }

            let fit = regression::fit_line(&log_sizes, &log_lengths)?;
            let dimension = dimension_from_slope(fit.slope)?;
            debug!(
                "run {run}: slope={:.4} r2={:.4} dimension={dimension:.3}",
                fit.slope, fit.r_squared
            );

            runs.push(RunEstimate {
                fit,
                log_lengths,
                dimension,
            });
        }

        let mean = runs.iter().map(|r| r.dimension).sum::<f64>() / runs.len() as f64;
        let dimension = mean.round_ties_even() as i64;
        debug!("mean dimension over {} run(s): {mean:.3} -> {dimension}", runs.len());

        Ok(DimensionEstimate {
            dimension,
            mean,
            log_sizes,
            runs,
        })
    }
}

impl Default for KnnLengthEstimator {
    fn default() -> Self {
        Self {
            sampling: SamplingParams::default(),
            n_runs: 1,
            seed: None,
        }
    }
}

impl DimensionEstimator for KnnLengthEstimator {
    fn estimate(&self, data: &[Vec<f32>], routine: &[usize]) -> Result<DimensionEstimate> {
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        self.estimate_with_rng(data, routine, &mut rng)
    }
}

/// Convert a log-log slope `m` into the dimension `1 / (1 - m)`.
fn dimension_from_slope(slope: f64) -> Result<f64> {
    let denom = 1.0 - slope;
    if denom == 0.0 {
        return Err(Error::DegenerateSlope { slope });
    }
    let dimension = 1.0 / denom;
    if !dimension.is_finite() {
        return Err(Error::DegenerateSlope { slope });
    }
    Ok(dimension)
}

/// Estimate the intrinsic dimension of `dataset`, drawing randomness from `rng`.
///
/// For each of `n_runs` runs, the mean kNN-graph length is measured at every
/// sample size in `routine` (averaging `n_resamplings` subsamples), a line is fit
/// to `(ln n, ln L)` and its slope `m` converted to `1 / (1 - m)`. The run
/// estimates are averaged and rounded half to even.
///
/// # Errors
///
/// - Every error of [`mean_sample_length`](crate::mean_sample_length).
/// - [`Error::InvalidParameter`] if `n_runs == 0`.
/// - [`Error::Underdetermined`] if `routine` has fewer than two distinct sizes.
/// - [`Error::DegenerateLength`] if a mean length is zero (coincident points).
/// - [`Error::DegenerateSlope`] if the fitted slope is exactly 1.
///
/// # Example
///
/// ```rust
/// use knndim::estimate_dimension;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// // Points along a line embedded in 3-D.
/// let data: Vec<Vec<f32>> = (0..200)
///     .map(|i| {
///         let t = i as f32 / 200.0;
///         vec![t, 2.0 * t, -t]
///     })
///     .collect();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let d = estimate_dimension(&data, &[25, 50, 100, 200], 5, 1, 10, &mut rng).unwrap();
/// assert_eq!(d, 1);
///
/// // A single sample size cannot determine a slope.
/// assert!(estimate_dimension(&data, &[50], 5, 1, 10, &mut rng).is_err());
/// ```
pub fn estimate_dimension<R: Rng + ?Sized>(
    dataset: &[Vec<f32>],
    routine: &[usize],
    n_neighbors: usize,
    n_runs: usize,
    n_resamplings: usize,
    rng: &mut R,
) -> Result<i64> {
    KnnLengthEstimator::new()
        .with_n_neighbors(n_neighbors)
        .with_n_runs(n_runs)
        .with_n_resamplings(n_resamplings)
        .estimate_with_rng(dataset, routine, rng)
        .map(|e| e.dimension)
}
