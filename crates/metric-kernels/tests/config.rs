//! Tests for building distances from serialized descriptions.

use float_eq::assert_float_eq;
use metric_kernels::{DistanceError, Metric, MetricConfig, MetricParams};
use test_case::test_case;

/// Parses a JSON description and builds the distance.
fn build(json: &str) -> Result<metric_kernels::Distance<f64>, DistanceError> {
    let config: MetricConfig<f64> = serde_json::from_str(json).unwrap_or_else(|e| panic!("{json}: {e}"));
    config.build()
}

#[test_case(r#"{ "metric": "euclidean" }"#, 5.0; "euclidean")]
#[test_case(r#"{ "metric": "manhattan" }"#, 7.0; "manhattan")]
#[test_case(r#"{ "metric": "minkowski" }"#, 5.0; "minkowski default p")]
#[test_case(r#"{ "metric": "minkowski", "p": 1.0 }"#, 7.0; "minkowski p1")]
#[test_case(r#"{ "metric": "weighted_minkowski", "p": 1.0, "weights": [2.0, 1.0] }"#, 10.0; "weighted_minkowski")]
#[test_case(r#"{ "metric": "standardised_euclidean", "sigma": [9.0, 16.0] }"#, 2_f64.sqrt(); "standardised_euclidean")]
#[test_case(r#"{ "metric": "mahalanobis", "vinv": [[1.0, 0.0], [0.0, 1.0]] }"#, 5.0; "mahalanobis")]
#[test_case(r#"{ "metric": "bray_curtis", "p": 3.0 }"#, 1.0; "ignored field")]
fn from_json(json: &str, expected: f64) {
    let distance = build(json).unwrap_or_else(|e| panic!("{json}: {e}"));
    let actual = distance.distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap_or_else(|e| panic!("{json}: {e}"));
    assert_float_eq!(actual, expected, ulps <= 1_u64);
}

#[test_case(r#"{ "metric": "weighted_minkowski", "p": 2.0 }"#; "missing weights")]
#[test_case(r#"{ "metric": "weighted_minkowski", "weights": [1.0] }"#; "missing p")]
#[test_case(r#"{ "metric": "standardised_euclidean" }"#; "missing sigma")]
#[test_case(r#"{ "metric": "mahalanobis", "vinv": [[1.0, 0.0], [1.0]] }"#; "ragged vinv")]
#[test_case(r#"{ "metric": "mahalanobis", "vinv": [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] }"#; "non-square vinv")]
#[test_case(r#"{ "metric": "minkowski", "p": 0.0 }"#; "zero p")]
fn invalid_parameters(json: &str) {
    assert!(matches!(build(json), Err(DistanceError::InvalidParameter(_))), "{json}");
}

#[test]
fn non_positive_variance() {
    assert!(matches!(
        build(r#"{ "metric": "standardised_euclidean", "sigma": [1.0, 0.0] }"#),
        Err(DistanceError::Domain(_))
    ));
}

#[test]
fn unknown_metric_is_rejected_by_serde() {
    let result = serde_json::from_str::<MetricConfig<f64>>(r#"{ "metric": "levenshtein" }"#);
    assert!(result.is_err());
}

#[test]
fn round_trip() -> Result<(), serde_json::Error> {
    let config = MetricConfig::new(Metric::WeightedMinkowski).with_p(3.0).with_weights(vec![1.0, 0.5]);
    let json = serde_json::to_string(&config)?;
    assert_eq!(json, r#"{"metric":"weighted_minkowski","p":3.0,"weights":[1.0,0.5]}"#);
    assert_eq!(serde_json::from_str::<MetricConfig<f64>>(&json)?, config);
    Ok(())
}

#[test]
fn every_metric_serializes_as_its_name() -> Result<(), serde_json::Error> {
    for metric in Metric::ALL {
        assert_eq!(serde_json::to_string(&metric)?, format!("\"{}\"", metric.name()));
    }
    Ok(())
}

#[test]
fn builder_matches_json() -> Result<(), DistanceError> {
    let built = MetricConfig::new(Metric::Mahalanobis).with_vinv(vec![vec![2.0, 0.0], vec![0.0, 2.0]]).build()?;
    let parsed = build(r#"{ "metric": "mahalanobis", "vinv": [[2.0, 0.0], [0.0, 2.0]] }"#)?;
    assert_eq!(built, parsed);
    assert!(matches!(built.params(), MetricParams::InverseCovariance(m) if m.dim() == (2, 2)));

    let from_metric: MetricConfig<f64> = Metric::Cosine.into();
    assert_eq!(from_metric.build()?.metric(), Metric::Cosine);
    Ok(())
}
