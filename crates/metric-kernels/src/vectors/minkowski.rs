//! Lp-norms between vectors, and their weighted and standardised variants.

use crate::error::{check_exponent, check_pair, check_params_len, DistanceError, Result};

/// Absolute difference between two elements.
fn abs_diff<T: num_traits::Float>(a: T, b: T) -> T {
    (a - b).abs()
}

/// Euclidean distance between two vectors.
///
/// Also known as the L2-norm, the Euclidean distance is defined as the square-root of the sum of the squared differences between corresponding elements.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn euclidean<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let (x, y) = (x.as_ref(), y.as_ref());
    check_pair(x, y)?;
    Ok(x.iter()
        .zip(y)
        .map(|(&a, &b)| a - b)
        .fold(T::zero(), |acc, d| acc + d * d)
        .sqrt())
}

/// Euclidean distance after scaling each dimension by its variance.
///
/// The squared difference in dimension `i` is divided by `sigma[i]`, the variance of that dimension.
///
/// # Errors
///
/// - If the vectors are empty or have different lengths.
/// - `InvalidParameter` if `sigma` does not have one entry per dimension.
/// - `Domain` if any entry of `sigma` is not strictly positive.
pub fn standardised_euclidean<S, W, T>(x: &S, y: &S, sigma: &W) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    W: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let (x, y, sigma) = (x.as_ref(), y.as_ref(), sigma.as_ref());
    let n = check_pair(x, y)?;
    check_params_len("variances", sigma, n)?;
    if let Some(i) = sigma.iter().position(|&s| s.is_nan() || s <= T::zero()) {
        return Err(DistanceError::Domain(format!(
            "Variances must be strictly positive, got {} at index {i}",
            sigma[i].to_f64().unwrap_or(f64::NAN)
        )));
    }

    Ok(x.iter()
        .zip(y)
        .zip(sigma)
        .map(|((&a, &b), &s)| (a - b) * (a - b) / s)
        .fold(T::zero(), |acc, v| acc + v)
        .sqrt())
}

/// Manhattan distance between two vectors.
///
/// Also known as the L1-norm, taxicab or city-block distance, the Manhattan distance is defined as the sum of the absolute differences between corresponding
/// elements.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn manhattan<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let (x, y) = (x.as_ref(), y.as_ref());
    check_pair(x, y)?;
    Ok(x.iter().zip(y).map(|(&a, &b)| abs_diff(a, b)).fold(T::zero(), |acc, v| acc + v))
}

/// Chebyshev distance between two vectors.
///
/// Also known as the L∞-norm, the Chebyshev distance is defined as the maximum absolute difference between corresponding elements.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn chebyshev<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let (x, y) = (x.as_ref(), y.as_ref());
    check_pair(x, y)?;
    Ok(x.iter().zip(y).map(|(&a, &b)| abs_diff(a, b)).fold(T::zero(), T::max))
}

/// Generic Minkowski distance between two vectors.
///
/// The generic Minkowski distance is defined as the p-th root of the sum of the absolute differences between corresponding elements raised to the power of p.
///
/// Negative values of `p` are accepted. When two vectors agree in some dimension, that term is `+∞` and the result is `0`; other degenerate combinations
/// may produce `NaN`.
///
/// # Errors
///
/// - If the vectors are empty or have different lengths.
/// - `InvalidParameter` if `p` is zero or `NaN`.
pub fn minkowski<S, T>(x: &S, y: &S, p: T) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let (x, y) = (x.as_ref(), y.as_ref());
    check_pair(x, y)?;
    check_exponent(p)?;
    Ok(x.iter()
        .zip(y)
        .map(|(&a, &b)| abs_diff(a, b).powf(p))
        .fold(T::zero(), |acc, v| acc + v)
        .powf(p.recip()))
}

/// Minkowski distance with a weight applied to each dimension.
///
/// Each absolute difference is multiplied by its weight before being raised to the power of `p`.
///
/// # Errors
///
/// - If the vectors are empty or have different lengths.
/// - `InvalidParameter` if `w` does not have one entry per dimension, or if `p` is zero or `NaN`.
pub fn weighted_minkowski<S, W, T>(x: &S, y: &S, w: &W, p: T) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    W: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let (x, y, w) = (x.as_ref(), y.as_ref(), w.as_ref());
    let n = check_pair(x, y)?;
    check_params_len("weights", w, n)?;
    check_exponent(p)?;
    Ok(x.iter()
        .zip(y)
        .zip(w)
        .map(|((&a, &b), &wi)| (wi * abs_diff(a, b)).powf(p))
        .fold(T::zero(), |acc, v| acc + v)
        .powf(p.recip()))
}
