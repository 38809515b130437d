//! Distance functions for real-valued vectors of the same dimensionality.

mod angular;
mod geo;
mod mahalanobis;
mod minkowski;
mod ratio;

pub use angular::{correlation, cosine};
pub use geo::haversine;
pub use mahalanobis::mahalanobis;
pub use minkowski::{chebyshev, euclidean, manhattan, minkowski, standardised_euclidean, weighted_minkowski};
pub use ratio::{bray_curtis, canberra};
