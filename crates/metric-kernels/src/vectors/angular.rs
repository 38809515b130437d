//! Vector dissimilarities based on the angles between vectors.
//!
//! Neither of these is a true metric: the triangle inequality does not hold. Both lie in `[0, 2]`, up to rounding.

use crate::error::{check_pair, dim_as, Result};

/// Returns `1 - xy / (sqrt(xx) * sqrt(yy))`, or `NaN` if either squared norm is zero.
///
/// The norms are taken separately so that their product stays in range when `xx * yy` would overflow or underflow.
fn one_minus_ratio<T: num_traits::Float>(xy: T, xx: T, yy: T) -> T {
    if xx.is_zero() || yy.is_zero() {
        T::nan()
    } else {
        T::one() - xy / (xx.sqrt() * yy.sqrt())
    }
}

/// The cosine distance between two vectors.
///
/// This is defined as one minus the dot product of the vectors divided by the product of their magnitudes. If either vector has a zero magnitude, the
/// angle is undefined and the result is `NaN`.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn cosine<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let (x, y) = (x.as_ref(), y.as_ref());
    check_pair(x, y)?;
    let (xy, xx, yy) = x
        .iter()
        .zip(y)
        .fold((T::zero(), T::zero(), T::zero()), |(xy, xx, yy), (&a, &b)| (xy + a * b, xx + a * a, yy + b * b));
    Ok(one_minus_ratio(xy, xx, yy))
}

/// The correlation distance between two vectors.
///
/// This is the cosine distance between the vectors after each has been centered on its own mean. A constant vector has a zero centered norm, so the
/// result is `NaN` whenever either input is constant.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn correlation<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let (x, y) = (x.as_ref(), y.as_ref());
    let n = dim_as::<T>(check_pair(x, y)?)?;

    let (sum_x, sum_y) = x.iter().zip(y).fold((T::zero(), T::zero()), |(sx, sy), (&a, &b)| (sx + a, sy + b));
    let (mu_x, mu_y) = (sum_x / n, sum_y / n);

    let (xy, xx, yy) = x.iter().zip(y).fold((T::zero(), T::zero(), T::zero()), |(xy, xx, yy), (&a, &b)| {
        let (a, b) = (a - mu_x, b - mu_y);
        (xy + a * b, xx + a * a, yy + b * b)
    });
    Ok(one_minus_ratio(xy, xx, yy))
}
