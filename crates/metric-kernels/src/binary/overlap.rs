//! Boolean dissimilarities that weigh disagreements against shared `true` dimensions.
//!
//! Whenever a denominator is zero the result is `0`.

use super::BinaryCounts;
use crate::error::Result;

/// Returns `numerator / denominator`, or zero if the denominator is zero.
fn ratio_or_zero<T: num_traits::Float>(numerator: T, denominator: T) -> T {
    if denominator.is_zero() {
        T::zero()
    } else {
        numerator / denominator
    }
}

/// Jaccard distance between the boolean codings of two vectors.
///
/// One minus the size of the intersection over the size of the union of the `true` dimensions. Two all-zero vectors are at distance `0`.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn jaccard<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let c = BinaryCounts::new(x.as_ref(), y.as_ref())?;
    let union = c.either();
    Ok(ratio_or_zero(union - c.true_true, union))
}

/// Dice dissimilarity: `R / (2 * TT + R)`.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn dice<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let c = BinaryCounts::new(x.as_ref(), y.as_ref())?;
    let r = c.not_equal();
    Ok(ratio_or_zero(r, c.true_true + c.true_true + r))
}

/// Kulsinski dissimilarity: `(R - TT + n) / (R + n)`.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn kulsinski<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let c = BinaryCounts::new(x.as_ref(), y.as_ref())?;
    let r = c.not_equal();
    Ok((r - c.true_true + c.n) / (r + c.n))
}

/// Russell-Rao dissimilarity: the fraction of dimensions that are not `true` in both vectors.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn russelrao<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let c = BinaryCounts::new(x.as_ref(), y.as_ref())?;
    Ok((c.n - c.true_true) / c.n)
}

/// Sokal-Sneath dissimilarity: `R / (TT / 2 + R)`.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn sokal_sneath<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let c = BinaryCounts::new(x.as_ref(), y.as_ref())?;
    let r = c.not_equal();
    let half = T::one() / (T::one() + T::one());
    Ok(ratio_or_zero(r, half * c.true_true + r))
}

/// Yule dissimilarity: `2 * TF * FT / (TT * FF + TF * FT)`.
///
/// Unlike the other boolean dissimilarities this one can exceed `1`; it lies in `[0, 2]`.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn yule<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let c = BinaryCounts::new(x.as_ref(), y.as_ref())?;
    let discordant = c.true_false * c.false_true;
    Ok(ratio_or_zero(discordant + discordant, c.true_true * c.false_false() + discordant))
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;

    use super::*;

    #[test]
    fn jaccard_basic() -> Result<()> {
        assert_float_eq!(jaccard(&[1.0, 0.0, 1.0], &[0.0, 0.0, 1.0])?, 0.5, abs <= 0.0);
        assert_float_eq!(jaccard(&[1.0, 0.0], &[0.0, 1.0])?, 1.0, abs <= 0.0);
        assert_float_eq!(jaccard(&[0.0, 0.0], &[0.0, 0.0])?, 0.0, abs <= 0.0);
        Ok(())
    }

    #[test]
    fn dice_basic() -> Result<()> {
        // TT = 1, R = 1
        assert_float_eq!(dice(&[1.0, 0.0, 1.0], &[0.0, 0.0, 1.0])?, 1.0 / 3.0, abs <= 0.0);
        assert_float_eq!(dice(&[0.0, 0.0], &[0.0, 0.0])?, 0.0, abs <= 0.0);
        Ok(())
    }

    #[test]
    fn kulsinski_basic() -> Result<()> {
        // (1 - 1 + 3) / (1 + 3)
        assert_float_eq!(kulsinski(&[1.0, 0.0, 1.0], &[0.0, 0.0, 1.0])?, 0.75, abs <= 0.0);
        // (0 - 0 + 2) / (0 + 2)
        assert_float_eq!(kulsinski(&[0.0, 0.0], &[0.0, 0.0])?, 1.0, abs <= 0.0);
        Ok(())
    }

    #[test]
    fn russelrao_basic() -> Result<()> {
        assert_float_eq!(russelrao(&[1.0, 0.0, 1.0], &[0.0, 0.0, 1.0])?, 2.0 / 3.0, abs <= 0.0);
        assert_float_eq!(russelrao(&[1.0, 1.0], &[1.0, 1.0])?, 0.0, abs <= 0.0);
        Ok(())
    }

    #[test]
    fn sokal_sneath_basic() -> Result<()> {
        // 1 / (0.5 + 1)
        assert_float_eq!(sokal_sneath(&[1.0, 0.0, 1.0], &[0.0, 0.0, 1.0])?, 2.0 / 3.0, abs <= 0.0);
        assert_float_eq!(sokal_sneath(&[0.0, 0.0], &[0.0, 0.0])?, 0.0, abs <= 0.0);
        Ok(())
    }

    #[test]
    fn yule_counts_false_false_as_a_scalar() -> Result<()> {
        // TT = 1, TF = 2, FT = 1, FF = 5 - 1 - 2 - 1 = 1
        let x = [1.0, 1.0, 0.0, 0.0, 1.0];
        let y = [1.0, 0.0, 1.0, 0.0, 0.0];
        assert_float_eq!(yule(&x, &y)?, 4.0 / 3.0, abs <= 0.0);
        assert_float_eq!(yule(&y, &x)?, 4.0 / 3.0, abs <= 0.0);
        Ok(())
    }

    #[test]
    fn yule_zero_denominator() -> Result<()> {
        // TT = 2 and FF = 0, TF = FT = 0
        assert_float_eq!(yule(&[1.0, 1.0], &[1.0, 1.0])?, 0.0, abs <= 0.0);
        assert_float_eq!(yule(&[0.0, 0.0], &[0.0, 0.0])?, 0.0, abs <= 0.0);
        Ok(())
    }
}
