//! Distances that normalize absolute differences by the magnitudes of the elements.

use crate::error::{check_pair, Result};

/// Canberra distance between two vectors.
///
/// The sum over dimensions of `|x_i - y_i| / (|x_i| + |y_i|)`. Dimensions where both elements are zero contribute nothing.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn canberra<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let (x, y) = (x.as_ref(), y.as_ref());
    check_pair(x, y)?;
    Ok(x.iter().zip(y).fold(T::zero(), |acc, (&a, &b)| {
        let denominator = a.abs() + b.abs();
        if denominator > T::zero() {
            acc + (a - b).abs() / denominator
        } else {
            acc
        }
    }))
}

/// Bray-Curtis dissimilarity between two vectors.
///
/// The sum of absolute differences divided by the sum of absolute values. Two all-zero vectors are at distance `0`.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn bray_curtis<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let (x, y) = (x.as_ref(), y.as_ref());
    check_pair(x, y)?;
    let (numerator, denominator) = x
        .iter()
        .zip(y)
        .fold((T::zero(), T::zero()), |(num, den), (&a, &b)| (num + (a - b).abs(), den + a.abs() + b.abs()));
    Ok(if denominator > T::zero() { numerator / denominator } else { T::zero() })
}
