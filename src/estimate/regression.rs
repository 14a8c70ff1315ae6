//! Ordinary least squares for a single regressor with intercept.

use super::util;
use crate::error::{Error, Result};

/// Fitted line `y ≈ slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Coefficient of `x`.
    pub slope: f64,
    /// Value at `x = 0`.
    pub intercept: f64,
    /// Coefficient of determination. 1.0 when `y` is constant.
    pub r_squared: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Least-squares line through `(x[i], y[i])`.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`] if `x` and `y` differ in length.
/// - [`Error::NonFinite`] if any value is NaN or infinite.
/// - [`Error::Underdetermined`] if `x` has fewer than two distinct values.
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    if x.len() != y.len() {
        return Err(Error::DimensionMismatch {
            expected: x.len(),
            found: y.len(),
        });
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFinite { name: "x" });
    }
    if y.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFinite { name: "y" });
    }
    let distinct = util::count_distinct(x);
    if distinct < 2 {
        return Err(Error::Underdetermined { distinct });
    }

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    let r_squared = if syy > 0.0 {
        (sxy * sxy / (sxx * syy)).min(1.0)
    } else {
        1.0
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}
