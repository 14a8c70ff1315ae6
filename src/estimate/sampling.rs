//! Mean total kNN-graph length of random subsamples.
//!
//! For a sample size `n`, draw `n` distinct points uniformly at random, build
//! their kNN graph and total its edge lengths. Averaging over resamplings gives
//! `L(n)`, whose growth with `n` carries the dimension signal:
//!
//! ```text
//! L(n) ∝ n^((d - 1) / d)
//! ```
//!
//! for points spread over a d-dimensional set.

use log::trace;
use rand::seq::index;
use rand::Rng;

use super::knn::{EdgeWeighting, KnnGraph};
use super::util;
use crate::error::{Error, Result};

/// Parameters of the resampling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingParams {
    /// Neighbors per point in each graph.
    pub n_neighbors: usize,
    /// Number of independent subsamples averaged per sample size.
    pub n_resamplings: usize,
    /// How graph edge lengths are totalled.
    pub weighting: EdgeWeighting,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            n_neighbors: 5,
            n_resamplings: 10,
            weighting: EdgeWeighting::Directed,
        }
    }
}

impl SamplingParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.n_neighbors == 0 {
            return Err(Error::InvalidParameter {
                name: "n_neighbors",
                message: "must be at least 1",
            });
        }
        if self.n_resamplings == 0 {
            return Err(Error::InvalidParameter {
                name: "n_resamplings",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Check that `n_points` can be sampled from `n_items` points and still
    /// give every sampled point a full neighbor list.
    pub(crate) fn check_sample_size(&self, n_points: usize, n_items: usize) -> Result<()> {
        if n_points > n_items {
            return Err(Error::SampleTooLarge {
                requested: n_points,
                n_items,
            });
        }
        if n_points <= self.n_neighbors {
            return Err(Error::SampleTooSmall {
                requested: n_points,
                n_neighbors: self.n_neighbors,
            });
        }
        Ok(())
    }
}

/// Mean total directed kNN-graph length over `n_resamplings` random subsamples
/// of `n_points` points.
///
/// Randomness is drawn from `rng` only; seed it for reproducible results.
///
/// # Errors
///
/// - [`Error::EmptyInput`], [`Error::DimensionMismatch`], [`Error::NonFinite`]
///   for a malformed dataset.
/// - [`Error::InvalidParameter`] if `n_neighbors` or `n_resamplings` is zero.
/// - [`Error::SampleTooLarge`] if `n_points` exceeds the dataset size.
/// - [`Error::SampleTooSmall`] if `n_points <= n_neighbors`.
///
/// # Example
///
/// ```rust
/// use knndim::mean_sample_length;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let data: Vec<Vec<f32>> = (0..50).map(|i| vec![i as f32, 0.0]).collect();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let length = mean_sample_length(&data, 20, 5, 4, &mut rng).unwrap();
/// assert!(length > 0.0);
///
/// // Too few points for five neighbors each.
/// assert!(mean_sample_length(&data, 3, 5, 4, &mut rng).is_err());
/// ```
pub fn mean_sample_length<R: Rng + ?Sized>(
    dataset: &[Vec<f32>],
    n_points: usize,
    n_neighbors: usize,
    n_resamplings: usize,
    rng: &mut R,
) -> Result<f64> {
    let params = SamplingParams {
        n_neighbors,
        n_resamplings,
        weighting: EdgeWeighting::Directed,
    };
    mean_sample_length_with(dataset, n_points, &params, rng)
}

/// [`mean_sample_length`] with full control over the sampling parameters,
/// including the edge weighting.
pub fn mean_sample_length_with<R: Rng + ?Sized>(
    dataset: &[Vec<f32>],
    n_points: usize,
    params: &SamplingParams,
    rng: &mut R,
) -> Result<f64> {
    params.validate()?;
    util::validate_dataset(dataset)?;
    params.check_sample_size(n_points, dataset.len())?;
    mean_length_unchecked(dataset, n_points, params, rng)
}

/// Resampling loop proper. Callers must have validated the dataset, the
/// parameters and `n_points`.
pub(crate) fn mean_length_unchecked<R: Rng + ?Sized>(
    dataset: &[Vec<f32>],
    n_points: usize,
    params: &SamplingParams,
    rng: &mut R,
) -> Result<f64> {
    let mut total = 0.0f64;
    for _ in 0..params.n_resamplings {
        let sample: Vec<&[f32]> = index::sample(rng, dataset.len(), n_points)
            .into_iter()
            .map(|i| dataset[i].as_slice())
            .collect();
        let graph = KnnGraph::build(&sample, params.n_neighbors)?;
        total += graph.total_weight(params.weighting);
    }

    let mean = total / params.n_resamplings as f64;
    trace!("n_points={n_points} mean_length={mean}");
    Ok(mean)
}
