use thiserror::Error;

/// Errors returned by the estimators in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points (or paired sequences) have inconsistent lengths.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// Sample size exceeds the number of points available.
    #[error("sample size {requested} exceeds dataset size {n_items}")]
    SampleTooLarge {
        /// Requested sample size.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Sample is too small to give every point `n_neighbors` neighbors.
    #[error("sample size {requested} is too small for {n_neighbors} neighbors (need more than {n_neighbors} points)")]
    SampleTooSmall {
        /// Requested sample size.
        requested: usize,
        /// Neighbor count of the graph.
        n_neighbors: usize,
    },

    /// Regression has fewer than two distinct abscissae.
    #[error("under-determined regression: {distinct} distinct sample size(s), need at least 2")]
    Underdetermined {
        /// Number of distinct x values supplied.
        distinct: usize,
    },

    /// Mean edge length is zero, so its logarithm is undefined.
    #[error("mean kNN graph length is zero at sample size {n_points}")]
    DegenerateLength {
        /// Sample size at which the length vanished.
        n_points: usize,
    },

    /// Fitted slope yields no finite dimension (slope of exactly 1).
    #[error("degenerate slope {slope}: dimension 1/(1 - slope) is undefined")]
    DegenerateSlope {
        /// Fitted log-log slope.
        slope: f64,
    },

    /// Input contains NaN or infinite values.
    #[error("non-finite value in {name}")]
    NonFinite {
        /// Which input carried the value.
        name: &'static str,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
