//! Errors raised by the kernels, and the precondition checks shared between them.

use thiserror::Error;

/// The ways in which a distance computation can be rejected.
///
/// Numerically undefined results (e.g. the cosine distance to a zero vector) are not errors. They are returned as `NaN` or `0.0` depending on the kernel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// The vectors themselves are unusable, e.g. they have different lengths or are empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The vectors are well-formed but violate a precondition of the particular kernel.
    #[error("Domain error: {0}")]
    Domain(String),

    /// An auxiliary parameter (exponent, weights, variances or matrix) is malformed.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// An identifier that does not name any kernel.
    #[error("Unknown metric: {0:?}")]
    UnknownMetric(String),
}

/// Result type alias for distance computations.
pub type Result<T> = core::result::Result<T, DistanceError>;

/// Checks that two vectors can be compared, and returns their common length.
///
/// # Errors
///
/// - If the vectors have different lengths.
/// - If the vectors are empty.
pub fn check_pair<T>(x: &[T], y: &[T]) -> Result<usize> {
    if x.len() != y.len() {
        return Err(DistanceError::InvalidInput(format!(
            "Vectors must have the same length, got {} and {}",
            x.len(),
            y.len()
        )));
    }
    if x.is_empty() {
        return Err(DistanceError::InvalidInput("Vectors must not be empty".to_string()));
    }
    Ok(x.len())
}

/// Checks that a per-dimension parameter vector matches the dimensionality of the data.
///
/// # Errors
///
/// If `params.len() != n`.
pub fn check_params_len<T>(name: &str, params: &[T], n: usize) -> Result<()> {
    if params.len() == n {
        Ok(())
    } else {
        Err(DistanceError::InvalidParameter(format!("Expected {n} {name}, got {}", params.len())))
    }
}

/// Checks that a Minkowski exponent is usable.
///
/// # Errors
///
/// If `p` is zero or `NaN`.
pub fn check_exponent<T: num_traits::Float>(p: T) -> Result<()> {
    if p.is_nan() || p.is_zero() {
        Err(DistanceError::InvalidParameter(format!(
            "Minkowski exponent must be non-zero, got {}",
            p.to_f64().unwrap_or(f64::NAN)
        )))
    } else {
        Ok(())
    }
}

/// Converts a dimension count into the float type of the kernel.
///
/// # Errors
///
/// If `n` cannot be represented in `T`.
pub fn dim_as<T: num_traits::Float>(n: usize) -> Result<T> {
    T::from(n).ok_or_else(|| DistanceError::InvalidInput(format!("Dimension {n} is not representable")))
}
