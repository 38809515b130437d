//! Boolean dissimilarities that only depend on how many dimensions disagree.

use super::BinaryCounts;
use crate::error::Result;

/// Hamming distance between the boolean codings of two vectors.
///
/// The fraction of dimensions in which exactly one of the two elements is nonzero.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn hamming<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let c = BinaryCounts::new(x.as_ref(), y.as_ref())?;
    Ok(c.not_equal() / c.n)
}

/// Simple matching dissimilarity between the boolean codings of two vectors.
///
/// Numerically the same as [`hamming`]; kept as its own identifier so that callers can select it by name.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn matching<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let c = BinaryCounts::new(x.as_ref(), y.as_ref())?;
    Ok(c.not_equal() / c.n)
}

/// Rogers-Tanimoto dissimilarity: `2R / (n + R)` where `R` is the number of disagreeing dimensions.
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn rogers_tanimoto<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let c = BinaryCounts::new(x.as_ref(), y.as_ref())?;
    let r = c.not_equal();
    Ok((r + r) / (c.n + r))
}

/// Sokal-Michener dissimilarity.
///
/// This has the same definition as [`rogers_tanimoto`].
///
/// # Errors
///
/// If the vectors are empty or have different lengths.
pub fn sokal_michener<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let c = BinaryCounts::new(x.as_ref(), y.as_ref())?;
    let r = c.not_equal();
    Ok((r + r) / (c.n + r))
}
