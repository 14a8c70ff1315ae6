use super::estimator::DimensionEstimate;
use crate::error::Result;

/// Common interface for global intrinsic-dimension estimators.
pub trait DimensionEstimator {
    /// Estimate the dimension of `data`, probing it at the sample sizes in `routine`.
    fn estimate(&self, data: &[Vec<f32>], routine: &[usize]) -> Result<DimensionEstimate>;

    /// Integer dimension only.
    fn estimate_dimension(&self, data: &[Vec<f32>], routine: &[usize]) -> Result<i64> {
        self.estimate(data, routine).map(|e| e.dimension)
    }
}
