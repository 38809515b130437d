//! Pairwise distance and dissimilarity kernels for fixed-length feature vectors.
//!
//! Each kernel is a pure function of two vectors of the same length (and, for a few kernels, some auxiliary parameters). They are meant to be plugged
//! into nearest-neighbor search, clustering or embedding algorithms that select a metric by name.
//!
//! ## Kernel families
//!
//! - [`vectors`]: Real-valued distances. Euclidean, standardised Euclidean, Manhattan, Chebyshev, Minkowski, weighted Minkowski, Mahalanobis, Canberra,
//!   Bray-Curtis, cosine, correlation and haversine.
//! - [`binary`]: Dissimilarities on the boolean coding of vectors, where an element is `true` iff it is nonzero. Hamming, Jaccard, matching, Dice,
//!   Kulsinski, Rogers-Tanimoto, Russell-Rao, Sokal-Michener, Sokal-Sneath and Yule.
//!
//! ## Selecting a kernel
//!
//! [`Metric`] names every kernel. Parameter-free kernels are available as plain functions through [`Metric::kernel`]; [`Distance`] binds a kernel to
//! validated parameters, and [`MetricConfig`] builds a [`Distance`] from a serialized description.
//!
//! ```rust
//! use metric_kernels::{Distance, Metric};
//!
//! let euclidean = Distance::<f64>::simple("euclidean".parse::<Metric>()?)?;
//! assert_eq!(euclidean.distance(&[0.0, 0.0], &[3.0, 4.0])?, 5.0);
//!
//! let minkowski = Distance::minkowski(1.0)?;
//! assert_eq!(minkowski.distance(&[1.0, 2.0], &[4.0, 6.0])?, 7.0);
//! # Ok::<(), metric_kernels::DistanceError>(())
//! ```
//!
//! ## Errors and undefined results
//!
//! Malformed inputs (vectors of different lengths, empty vectors, bad parameters) are reported as a [`DistanceError`]. Results that are mathematically
//! undefined are not errors: the cosine and correlation dissimilarities return `NaN` when a norm is zero, Mahalanobis returns `NaN` for a matrix that is
//! not positive semi-definite, and every other zero denominator yields `0`.
//!
//! Summation is always left-to-right over the dimensions, so results are reproducible bit for bit.

pub mod binary;
mod config;
mod error;
mod metric;
pub mod vectors;

pub use config::MetricConfig;
pub use error::{DistanceError, Result};
pub use metric::{Distance, Kernel, Metric, MetricParams, ParamShape};
