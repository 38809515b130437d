//! Distances between points on a sphere.

use crate::error::{check_pair, DistanceError, Result};

/// Haversine (great-circle) distance between two points on the unit sphere.
///
/// Each vector is a `[latitude, longitude]` pair in radians. The result is the central angle between the points, in radians. Multiply by the radius of
/// the sphere to get a length.
///
/// # Errors
///
/// - If the vectors are empty or have different lengths.
/// - `Domain` if the vectors are not 2-dimensional.
pub fn haversine<S, T>(x: &S, y: &S) -> Result<T>
where
    S: AsRef<[T]> + ?Sized,
    T: num_traits::Float,
{
    let (x, y) = (x.as_ref(), y.as_ref());
    let n = check_pair(x, y)?;
    if n != 2 {
        return Err(DistanceError::Domain(format!("Haversine is only defined for 2-dimensional data, got {n} dimensions")));
    }

    let half = T::one() / (T::one() + T::one());
    let sin_lat = (half * (x[0] - y[0])).sin();
    let sin_lon = (half * (x[1] - y[1])).sin();
    let result = (sin_lat * sin_lat + x[0].cos() * y[0].cos() * sin_lon * sin_lon).sqrt();

    // Rounding can push nearly antipodal points just past 1.
    let angle = result.min(T::one()).asin();
    Ok(angle + angle)
}
