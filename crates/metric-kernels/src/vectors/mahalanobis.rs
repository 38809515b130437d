//! The Mahalanobis distance.

use ndarray::ArrayView2;

use crate::error::{check_pair, DistanceError, Result};

/// Mahalanobis distance between two vectors, given the inverse of a covariance matrix.
///
/// Computed as `sqrt(d^T * vinv * d)` with `d = x - y`. The matrix is expected to be symmetric positive semi-definite. This is not checked: a matrix
/// that is not PSD may produce a negative quadratic form, and then the result is `NaN`.
///
/// # Errors
///
/// - If the vectors are empty or have different lengths.
/// - `InvalidParameter` if `vinv` is not `n x n`.
pub fn mahalanobis<S, T>(x: &S, y: &S, vinv: ArrayView2<T>) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let (x, y) = (x.as_ref(), y.as_ref());
    let n = check_pair(x, y)?;
    if vinv.dim() != (n, n) {
        let (r, c) = vinv.dim();
        return Err(DistanceError::InvalidParameter(format!("Expected a {n}x{n} inverse covariance matrix, got {r}x{c}")));
    }

    let diff = x.iter().zip(y).map(|(&a, &b)| a - b).collect::<Vec<_>>();
    Ok(vinv
        .rows()
        .into_iter()
        .zip(&diff)
        .fold(T::zero(), |acc, (row, &di)| {
            let projected = row.iter().zip(&diff).fold(T::zero(), |tmp, (&v, &dj)| tmp + v * dj);
            acc + projected * di
        })
        .sqrt())
}
