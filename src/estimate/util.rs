use crate::error::{Error, Result};

/// Squared distance, accumulated in `f64` so large finite coordinates cannot
/// overflow.
#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = f64::from(*x) - f64::from(*y);
            d * d
        })
        .sum()
}

#[inline]
pub(crate) fn euclidean(a: &[f32], b: &[f32]) -> f64 {
    squared_euclidean(a, b).sqrt()
}

/// Check that `data` is non-empty, rectangular and finite.
///
/// Returns the common dimensionality.
pub(crate) fn validate_dataset<P: AsRef<[f32]>>(data: &[P]) -> Result<usize> {
    let first = data.first().ok_or(Error::EmptyInput)?;
    let d = first.as_ref().len();
    if d == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }

    for point in data {
        let point = point.as_ref();
        if point.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: point.len(),
            });
        }
        if point.iter().any(|x| !x.is_finite()) {
            return Err(Error::NonFinite { name: "dataset" });
        }
    }
    Ok(d)
}

/// Number of distinct values in `xs`, compared exactly.
pub(crate) fn count_distinct(xs: &[f64]) -> usize {
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.dedup();
    sorted.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_is_pythagorean() {
        assert_eq!(euclidean(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(squared_euclidean(&[1.0, 1.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn euclidean_does_not_overflow_f32() {
        let d = euclidean(&[0.0, 0.0], &[3.0e38, 3.0e38]);
        assert!(d.is_finite());
        assert!((d / (3.0e38 * 2.0f64.sqrt()) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn validate_rejects_bad_shapes() {
        let empty: Vec<Vec<f32>> = vec![];
        assert!(matches!(validate_dataset(&empty), Err(Error::EmptyInput)));

        let zero_dim = vec![Vec::<f32>::new()];
        assert!(matches!(
            validate_dataset(&zero_dim),
            Err(Error::InvalidParameter { name: "dimension", .. })
        ));

        let ragged = vec![vec![0.0, 0.0], vec![1.0]];
        assert!(matches!(
            validate_dataset(&ragged),
            Err(Error::DimensionMismatch { expected: 2, found: 1 })
        ));

        let nan = vec![vec![0.0, f32::NAN]];
        assert!(matches!(validate_dataset(&nan), Err(Error::NonFinite { .. })));

        let ok = vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]];
        assert_eq!(validate_dataset(&ok).unwrap(), 3);
    }

    #[test]
    fn distinct_counts_exact_duplicates() {
        assert_eq!(count_distinct(&[1.0, 2.0, 1.0, 3.0]), 3);
        assert_eq!(count_distinct(&[4.0]), 1);
        assert_eq!(count_distinct(&[]), 0);
    }
}
