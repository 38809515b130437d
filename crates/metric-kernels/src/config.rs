//! Building a [`Distance`] from a serialized description.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DistanceError, Result},
    metric::{Distance, Metric, MetricParams, ParamShape},
};

/// A serializable description of a kernel and its parameters.
///
/// Only the fields that the chosen kernel needs are read. For example:
///
/// ```json
/// { "metric": "weighted_minkowski", "p": 3.0, "weights": [1.0, 0.5, 2.0] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricConfig<T> {
    /// The identifier of the kernel.
    pub metric: Metric,
    /// Exponent for the Minkowski family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<T>,
    /// Per-dimension weights for `weighted_minkowski`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<T>>,
    /// Per-dimension variances for `standardised_euclidean`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigma: Option<Vec<T>>,
    /// Rows of the inverse covariance matrix for `mahalanobis`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vinv: Option<Vec<Vec<T>>>,
}

impl<T> MetricConfig<T> {
    /// A description of a kernel with no parameters set.
    pub const fn new(metric: Metric) -> Self {
        Self {
            metric,
            p: None,
            weights: None,
            sigma: None,
            vinv: None,
        }
    }

    /// Sets the exponent.
    #[must_use]
    pub fn with_p(mut self, p: T) -> Self {
        self.p = Some(p);
        self
    }

    /// Sets the per-dimension weights.
    #[must_use]
    pub fn with_weights(mut self, weights: Vec<T>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Sets the per-dimension variances.
    #[must_use]
    pub fn with_sigma(mut self, sigma: Vec<T>) -> Self {
        self.sigma = Some(sigma);
        self
    }

    /// Sets the rows of the inverse covariance matrix.
    #[must_use]
    pub fn with_vinv(mut self, vinv: Vec<Vec<T>>) -> Self {
        self.vinv = Some(vinv);
        self
    }
}

impl<T: num_traits::Float> MetricConfig<T> {
    /// Validates the description and builds the [`Distance`] it describes.
    ///
    /// `minkowski` falls back to `p = 2` when no exponent is given.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if a required field is missing or if the rows of `vinv` have different lengths.
    /// - Anything [`Distance::new`] rejects.
    pub fn build(self) -> Result<Distance<T>> {
        let Self {
            metric,
            p,
            weights,
            sigma,
            vinv,
        } = self;

        let shape = metric.param_shape();
        let ignored = [
            ("p", p.is_some() && !matches!(shape, ParamShape::Exponent | ParamShape::WeightsAndExponent)),
            ("weights", weights.is_some() && shape != ParamShape::WeightsAndExponent),
            ("sigma", sigma.is_some() && shape != ParamShape::Variances),
            ("vinv", vinv.is_some() && shape != ParamShape::InverseCovariance),
        ];
        for (field, _) in ignored.iter().filter(|(_, unused)| *unused) {
            ftlog::warn!("Ignoring `{field}`, which {metric} does not use");
        }

        let params = match shape {
            ParamShape::None => MetricParams::None,
            ParamShape::Exponent => MetricParams::Exponent(p.unwrap_or_else(|| T::one() + T::one())),
            ParamShape::Variances => MetricParams::Variances(sigma.ok_or_else(|| missing(metric, "sigma"))?),
            ParamShape::WeightsAndExponent => MetricParams::Weighted {
                weights: weights.ok_or_else(|| missing(metric, "weights"))?,
                p: p.ok_or_else(|| missing(metric, "p"))?,
            },
            ParamShape::InverseCovariance => MetricParams::InverseCovariance(rows_to_matrix(vinv.ok_or_else(|| missing(metric, "vinv"))?)?),
        };

        ftlog::info!("Configured {metric} distance");
        Distance::new(metric, params)
    }
}

impl<T> From<Metric> for MetricConfig<T> {
    fn from(metric: Metric) -> Self {
        Self::new(metric)
    }
}

/// The error for a missing required field.
fn missing(metric: Metric, field: &str) -> DistanceError {
    DistanceError::InvalidParameter(format!("{metric} requires `{field}`"))
}

/// Stacks rows of equal length into a matrix.
fn rows_to_matrix<T: Clone>(rows: Vec<Vec<T>>) -> Result<Array2<T>> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);
    if let Some(i) = rows.iter().position(|r| r.len() != n_cols) {
        return Err(DistanceError::InvalidParameter(format!(
            "Row {i} of the matrix has {} entries, expected {n_cols}",
            rows[i].len()
        )));
    }
    let flat = rows.into_iter().flatten().collect::<Vec<_>>();
    Array2::from_shape_vec((n_rows, n_cols), flat).map_err(|e| DistanceError::InvalidParameter(e.to_string()))
}
