//! Selection of kernels by identifier, and dispatch with auxiliary parameters.

use core::{fmt, str::FromStr};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{
    binary,
    error::{check_exponent, DistanceError, Result},
    vectors,
};

/// A parameter-free kernel.
pub type Kernel<T> = fn(&[T], &[T]) -> Result<T>;

/// The available distance kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// L2 distance.
    Euclidean,
    /// L2 distance with each dimension scaled by its variance.
    StandardisedEuclidean,
    /// L1 distance.
    Manhattan,
    /// L∞ distance.
    Chebyshev,
    /// Lp distance for a chosen exponent `p`.
    Minkowski,
    /// Lp distance with per-dimension weights.
    WeightedMinkowski,
    /// Distance under an inverse covariance matrix.
    Mahalanobis,
    /// Canberra distance.
    Canberra,
    /// Bray-Curtis dissimilarity.
    BrayCurtis,
    /// Cosine dissimilarity.
    Cosine,
    /// Correlation dissimilarity.
    Correlation,
    /// Great-circle distance between latitude/longitude pairs in radians.
    Haversine,
    /// Fraction of disagreeing dimensions.
    Hamming,
    /// Jaccard distance.
    Jaccard,
    /// Simple matching dissimilarity.
    Matching,
    /// Dice dissimilarity.
    Dice,
    /// Kulsinski dissimilarity.
    Kulsinski,
    /// Rogers-Tanimoto dissimilarity.
    RogersTanimoto,
    /// Russell-Rao dissimilarity.
    Russelrao,
    /// Sokal-Michener dissimilarity.
    SokalMichener,
    /// Sokal-Sneath dissimilarity.
    SokalSneath,
    /// Yule dissimilarity.
    Yule,
}

/// The auxiliary parameters a kernel needs in addition to the two vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamShape {
    /// Only the two vectors.
    None,
    /// A scalar exponent `p`.
    Exponent,
    /// One variance per dimension.
    Variances,
    /// One weight per dimension and a scalar exponent `p`.
    WeightsAndExponent,
    /// An `n x n` inverse covariance matrix.
    InverseCovariance,
}

impl Metric {
    /// Every kernel, in a fixed order.
    pub const ALL: [Self; 22] = [
        Self::Euclidean,
        Self::StandardisedEuclidean,
        Self::Manhattan,
        Self::Chebyshev,
        Self::Minkowski,
        Self::WeightedMinkowski,
        Self::Mahalanobis,
        Self::Canberra,
        Self::BrayCurtis,
        Self::Cosine,
        Self::Correlation,
        Self::Haversine,
        Self::Hamming,
        Self::Jaccard,
        Self::Matching,
        Self::Dice,
        Self::Kulsinski,
        Self::RogersTanimoto,
        Self::Russelrao,
        Self::SokalMichener,
        Self::SokalSneath,
        Self::Yule,
    ];

    /// The stable identifier of the kernel.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::StandardisedEuclidean => "standardised_euclidean",
            Self::Manhattan => "manhattan",
            Self::Chebyshev => "chebyshev",
            Self::Minkowski => "minkowski",
            Self::WeightedMinkowski => "weighted_minkowski",
            Self::Mahalanobis => "mahalanobis",
            Self::Canberra => "canberra",
            Self::BrayCurtis => "bray_curtis",
            Self::Cosine => "cosine",
            Self::Correlation => "correlation",
            Self::Haversine => "haversine",
            Self::Hamming => "hamming",
            Self::Jaccard => "jaccard",
            Self::Matching => "matching",
            Self::Dice => "dice",
            Self::Kulsinski => "kulsinski",
            Self::RogersTanimoto => "rogers_tanimoto",
            Self::Russelrao => "russelrao",
            Self::SokalMichener => "sokal_michener",
            Self::SokalSneath => "sokal_sneath",
            Self::Yule => "yule",
        }
    }

    /// The auxiliary parameters the kernel needs.
    #[must_use]
    pub const fn param_shape(self) -> ParamShape {
        match self {
            Self::Minkowski => ParamShape::Exponent,
            Self::StandardisedEuclidean => ParamShape::Variances,
            Self::WeightedMinkowski => ParamShape::WeightsAndExponent,
            Self::Mahalanobis => ParamShape::InverseCovariance,
            _ => ParamShape::None,
        }
    }

    /// Whether the kernel reads its inputs as boolean codings.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(
            self,
            Self::Hamming
                | Self::Jaccard
                | Self::Matching
                | Self::Dice
                | Self::Kulsinski
                | Self::RogersTanimoto
                | Self::Russelrao
                | Self::SokalMichener
                | Self::SokalSneath
                | Self::Yule
        )
    }

    /// Whether the kernel satisfies the triangle inequality for every valid choice of parameters.
    ///
    /// The Minkowski family is a metric only for `p >= 1`; see [`Distance::is_true_metric`]. Mahalanobis assumes its matrix is positive
    /// definite, which is not checked: other matrices give `NaN` or a pseudo-metric.
    #[must_use]
    pub const fn is_true_metric(self) -> bool {
        matches!(
            self,
            Self::Euclidean
                | Self::StandardisedEuclidean
                | Self::Manhattan
                | Self::Chebyshev
                | Self::Mahalanobis
                | Self::Canberra
                | Self::Haversine
                | Self::Hamming
                | Self::Matching
        )
    }

    /// The plain function for a kernel that needs no auxiliary parameters.
    ///
    /// Returns `None` for the kernels listed under a [`ParamShape`] other than `None`.
    #[must_use]
    pub fn kernel<T: num_traits::Float>(self) -> Option<Kernel<T>> {
        let kernel: Kernel<T> = match self {
            Self::Euclidean => vectors::euclidean::<[T], T>,
            Self::Manhattan => vectors::manhattan::<[T], T>,
            Self::Chebyshev => vectors::chebyshev::<[T], T>,
            Self::Canberra => vectors::canberra::<[T], T>,
            Self::BrayCurtis => vectors::bray_curtis::<[T], T>,
            Self::Cosine => vectors::cosine::<[T], T>,
            Self::Correlation => vectors::correlation::<[T], T>,
            Self::Haversine => vectors::haversine::<[T], T>,
            Self::Hamming => binary::hamming::<[T], T>,
            Self::Jaccard => binary::jaccard::<[T], T>,
            Self::Matching => binary::matching::<[T], T>,
            Self::Dice => binary::dice::<[T], T>,
            Self::Kulsinski => binary::kulsinski::<[T], T>,
            Self::RogersTanimoto => binary::rogers_tanimoto::<[T], T>,
            Self::Russelrao => binary::russelrao::<[T], T>,
            Self::SokalMichener => binary::sokal_michener::<[T], T>,
            Self::SokalSneath => binary::sokal_sneath::<[T], T>,
            Self::Yule => binary::yule::<[T], T>,
            Self::StandardisedEuclidean | Self::Minkowski | Self::WeightedMinkowski | Self::Mahalanobis => return None,
        };
        Some(kernel)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Metric {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let alias = match key.as_str() {
            "standardized_euclidean" | "seuclidean" => Some(Self::StandardisedEuclidean),
            "l2" => Some(Self::Euclidean),
            "l1" | "taxicab" | "cityblock" => Some(Self::Manhattan),
            "linfinity" | "linf" => Some(Self::Chebyshev),
            "braycurtis" => Some(Self::BrayCurtis),
            "wminkowski" => Some(Self::WeightedMinkowski),
            _ => None,
        };
        alias.or_else(|| Self::ALL.into_iter().find(|m| m.name() == key)).ok_or_else(|| {
            ftlog::debug!("No kernel is named {s:?}");
            DistanceError::UnknownMetric(s.to_string())
        })
    }
}

/// The auxiliary parameters bound to a kernel.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricParams<T> {
    /// No parameters.
    None,
    /// The exponent of the Minkowski distance.
    Exponent(T),
    /// The per-dimension variances of the standardised Euclidean distance.
    Variances(Vec<T>),
    /// The per-dimension weights and the exponent of the weighted Minkowski distance.
    Weighted {
        /// One weight per dimension.
        weights: Vec<T>,
        /// The exponent.
        p: T,
    },
    /// The inverse covariance matrix of the Mahalanobis distance.
    InverseCovariance(Array2<T>),
}

impl<T> MetricParams<T> {
    /// The shape of these parameters.
    #[must_use]
    pub const fn shape(&self) -> ParamShape {
        match self {
            Self::None => ParamShape::None,
            Self::Exponent(_) => ParamShape::Exponent,
            Self::Variances(_) => ParamShape::Variances,
            Self::Weighted { .. } => ParamShape::WeightsAndExponent,
            Self::InverseCovariance(_) => ParamShape::InverseCovariance,
        }
    }
}

/// A kernel together with validated auxiliary parameters.
///
/// This is immutable once built, so it can be shared between threads and used for any number of pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Distance<T> {
    /// The selected kernel.
    metric: Metric,
    /// Its parameters, whose shape matches `metric.param_shape()`.
    params: MetricParams<T>,
}

impl<T: num_traits::Float> Distance<T> {
    /// Binds parameters to a kernel.
    ///
    /// Checks everything that can be checked without knowing the dimensionality of the data. Dimension checks happen on every call to
    /// [`distance`](Self::distance).
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if the shape of `params` does not match the kernel, if an exponent is zero or `NaN`, or if the matrix is not square.
    /// - `Domain` if a variance is not strictly positive.
    pub fn new(metric: Metric, params: MetricParams<T>) -> Result<Self> {
        if params.shape() != metric.param_shape() {
            return Err(DistanceError::InvalidParameter(format!(
                "{metric} takes {:?} parameters, got {:?}",
                metric.param_shape(),
                params.shape()
            )));
        }

        match &params {
            MetricParams::None => (),
            MetricParams::Exponent(p) | MetricParams::Weighted { p, .. } => check_exponent(*p)?,
            MetricParams::Variances(sigma) => {
                if let Some(i) = sigma.iter().position(|&s| s.is_nan() || s <= T::zero()) {
                    return Err(DistanceError::Domain(format!("Variances must be strictly positive, found a bad one at index {i}")));
                }
            }
            MetricParams::InverseCovariance(vinv) => {
                if !vinv.is_square() {
                    let (r, c) = vinv.dim();
                    return Err(DistanceError::InvalidParameter(format!("The inverse covariance matrix must be square, got {r}x{c}")));
                }
            }
        }

        ftlog::debug!("Built {metric} distance with {:?} parameters", params.shape());
        Ok(Self { metric, params })
    }

    /// A kernel that takes no auxiliary parameters.
    ///
    /// # Errors
    ///
    /// If the kernel needs parameters.
    pub fn simple(metric: Metric) -> Result<Self> {
        Self::new(metric, MetricParams::None)
    }

    /// The Minkowski distance with exponent `p`.
    ///
    /// # Errors
    ///
    /// If `p` is zero or `NaN`.
    pub fn minkowski(p: T) -> Result<Self> {
        Self::new(Metric::Minkowski, MetricParams::Exponent(p))
    }

    /// The weighted Minkowski distance with exponent `p`.
    ///
    /// # Errors
    ///
    /// If `p` is zero or `NaN`.
    pub fn weighted_minkowski(weights: Vec<T>, p: T) -> Result<Self> {
        Self::new(Metric::WeightedMinkowski, MetricParams::Weighted { weights, p })
    }

    /// The standardised Euclidean distance with per-dimension variances `sigma`.
    ///
    /// # Errors
    ///
    /// If any variance is not strictly positive.
    pub fn standardised_euclidean(sigma: Vec<T>) -> Result<Self> {
        Self::new(Metric::StandardisedEuclidean, MetricParams::Variances(sigma))
    }

    /// The Mahalanobis distance with inverse covariance matrix `vinv`.
    ///
    /// # Errors
    ///
    /// If `vinv` is not square.
    pub fn mahalanobis(vinv: Array2<T>) -> Result<Self> {
        Self::new(Metric::Mahalanobis, MetricParams::InverseCovariance(vinv))
    }

    /// The selected kernel.
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// The bound parameters.
    pub const fn params(&self) -> &MetricParams<T> {
        &self.params
    }

    /// Whether this distance, with its parameters, satisfies the triangle inequality.
    ///
    /// For Mahalanobis this assumes the bound matrix is positive definite.
    pub fn is_true_metric(&self) -> bool {
        match &self.params {
            MetricParams::Exponent(p) | MetricParams::Weighted { p, .. } => *p >= T::one(),
            _ => self.metric.is_true_metric(),
        }
    }

    /// Computes the distance between two vectors.
    ///
    /// # Errors
    ///
    /// Whatever the selected kernel raises for these vectors and parameters.
    pub fn distance<S: AsRef<[T]> + ?Sized>(&self, x: &S, y: &S) -> Result<T> {
        let (x, y) = (x.as_ref(), y.as_ref());
        match &self.params {
            MetricParams::Exponent(p) => vectors::minkowski(x, y, *p),
            MetricParams::Weighted { weights, p } => vectors::weighted_minkowski(x, y, weights, *p),
            MetricParams::Variances(sigma) => vectors::standardised_euclidean(x, y, sigma),
            MetricParams::InverseCovariance(vinv) => vectors::mahalanobis(x, y, vinv.view()),
            MetricParams::None => match self.metric.kernel() {
                Some(kernel) => kernel(x, y),
                None => Err(DistanceError::InvalidParameter(format!("{} requires parameters", self.metric))),
            },
        }
    }
}

impl<T> fmt::Display for Distance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() -> Result<()> {
        for metric in Metric::ALL {
            assert_eq!(metric.name().parse::<Metric>()?, metric);
            assert_eq!(metric.to_string(), metric.name());
        }
        Ok(())
    }

    #[test]
    fn aliases() -> Result<()> {
        assert_eq!("L2".parse::<Metric>()?, Metric::Euclidean);
        assert_eq!("cityblock".parse::<Metric>()?, Metric::Manhattan);
        assert_eq!("standardized-euclidean".parse::<Metric>()?, Metric::StandardisedEuclidean);
        assert_eq!(" braycurtis ".parse::<Metric>()?, Metric::BrayCurtis);
        assert!(matches!("levenshtein".parse::<Metric>(), Err(DistanceError::UnknownMetric(_))));
        Ok(())
    }

    #[test]
    fn kernels_exist_for_parameter_free_metrics() {
        for metric in Metric::ALL {
            let has_kernel = metric.kernel::<f64>().is_some();
            assert_eq!(has_kernel, metric.param_shape() == ParamShape::None, "{metric}");
        }
    }

    #[test]
    fn shape_mismatch() {
        assert!(matches!(
            Distance::<f64>::new(Metric::Euclidean, MetricParams::Exponent(2.0)),
            Err(DistanceError::InvalidParameter(_))
        ));
        assert!(matches!(Distance::<f64>::simple(Metric::Minkowski), Err(DistanceError::InvalidParameter(_))));
        assert!(matches!(Distance::<f64>::minkowski(0.0), Err(DistanceError::InvalidParameter(_))));
        assert!(matches!(
            Distance::<f64>::standardised_euclidean(vec![1.0, 0.0]),
            Err(DistanceError::Domain(_))
        ));
        assert!(matches!(
            Distance::<f64>::mahalanobis(Array2::zeros((2, 3))),
            Err(DistanceError::InvalidParameter(_))
        ));
    }

    #[test]
    fn minkowski_family_is_a_metric_above_one() -> Result<()> {
        assert!(Distance::minkowski(1.0)?.is_true_metric());
        assert!(Distance::minkowski(3.5)?.is_true_metric());
        assert!(!Distance::minkowski(0.5)?.is_true_metric());
        assert!(!Distance::weighted_minkowski(vec![1.0], -1.0)?.is_true_metric());
        assert!(Distance::<f64>::simple(Metric::Hamming)?.is_true_metric());
        assert!(!Distance::<f64>::simple(Metric::Cosine)?.is_true_metric());
        Ok(())
    }
}
