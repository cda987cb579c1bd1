#![cfg(feature = "dev")]
//! Tests for the feature registry, request validation and dispatch.
//!
//! ## Test Organization
//!
//! 1. **Registry** - Names and accepted parameters
//! 2. **Validation** - Rejected parameters and scalar statistics
//! 3. **Dispatch** - Raw results, reduction and determinism

use handwriting_features::internals::engine::executor::{FeatureExecutor, FeatureRequest, compute};
use handwriting_features::internals::engine::output::Feature;
use handwriting_features::internals::engine::registry::{FeatureId, ParameterSet};
use handwriting_features::internals::engine::validator::Validator;
use handwriting_features::internals::evaluation::statistics::Statistic;
use handwriting_features::internals::primitives::config::FeatureConfig;
use handwriting_features::internals::primitives::errors::FeatureError;
use handwriting_features::internals::primitives::partition::Axis;
use handwriting_features::internals::primitives::partition::PenState::{InAir, OnSurface};
use handwriting_features::internals::primitives::sample::{Point, Sample};

fn mixed_sample() -> Sample<f64> {
    let points = vec![
        Point::at(0.0, 0.0, 0.0, OnSurface).with_pressure(100.0),
        Point::at(1.0, 1.0, 1.0, OnSurface).with_pressure(200.0),
        Point::at(3.0, 2.0, 2.0, OnSurface).with_pressure(300.0),
        Point::at(3.0, 5.0, 4.0, InAir),
        Point::at(4.0, 7.0, 5.0, InAir),
        Point::at(6.0, 7.0, 6.0, OnSurface).with_pressure(150.0),
        Point::at(9.0, 8.0, 8.0, OnSurface).with_pressure(250.0),
        Point::at(9.0, 4.0, 9.0, OnSurface).with_pressure(50.0),
        Point::at(8.0, 0.0, 11.0, InAir),
        Point::at(7.0, 1.0, 12.0, InAir),
    ];
    Sample::new(points).unwrap()
}

const SOME_STATS: [Statistic; 4] = [
    Statistic::Mean,
    Statistic::Std,
    Statistic::Median,
    Statistic::Percentile(80),
];

// ============================================================================
// Registry Tests
// ============================================================================

#[test]
fn test_feature_names_round_trip() {
    for id in FeatureId::ALL {
        assert_eq!(id.name().parse::<FeatureId>().unwrap(), id);
        assert_eq!(id.to_string(), id.name());
    }
}

#[test]
fn test_unknown_feature_name() {
    assert_eq!(
        "speed".parse::<FeatureId>().unwrap_err(),
        FeatureError::UnknownFeature("speed".to_string())
    );
}

#[test]
fn test_parameter_sets() {
    assert_eq!(
        FeatureId::Jerk.parameters(),
        ParameterSet {
            axis: true,
            in_air: true
        }
    );
    assert_eq!(
        FeatureId::StrokeWidth.parameters(),
        ParameterSet {
            axis: false,
            in_air: true
        }
    );
    assert_eq!(FeatureId::Pressure.parameters(), ParameterSet::default());
    assert_eq!(
        FeatureId::RatioOfWritingDurations.parameters(),
        ParameterSet::default()
    );
}

#[test]
fn test_scalar_features() {
    let scalar: Vec<FeatureId> = FeatureId::ALL
        .iter()
        .copied()
        .filter(|id| id.is_scalar())
        .collect();
    assert_eq!(
        scalar,
        vec![FeatureId::WritingDuration, FeatureId::RatioOfWritingDurations]
    );
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_rejects_axis_on_non_kinematic_feature() {
    let request = FeatureRequest::new().axis(Axis::X);
    let err = Validator::validate_request(FeatureId::Azimuth, &request).unwrap_err();

    assert!(matches!(
        err,
        FeatureError::InvalidParameter {
            parameter: "axis",
            ..
        }
    ));
}

#[test]
fn test_rejects_in_air_on_whole_sample_feature() {
    let sample = mixed_sample();
    let config = FeatureConfig::default();
    let request = FeatureRequest::new().in_air(true);

    for id in [
        FeatureId::Pressure,
        FeatureId::RatioOfStrokeDurations,
        FeatureId::RatioOfWritingDurations,
    ] {
        let err = compute(&sample, &config, id, &request).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::InvalidParameter {
                parameter: "in_air",
                ..
            }
        ));
    }
}

#[test]
fn test_rejects_statistics_on_scalar_feature() {
    let sample = mixed_sample();
    let config = FeatureConfig::default();
    let request = FeatureRequest::new().statistics(&[Statistic::Mean]);

    let err = compute(&sample, &config, FeatureId::WritingDuration, &request).unwrap_err();
    assert_eq!(
        err,
        FeatureError::InvalidRequest {
            feature: "writing_duration",
            reason: "statistics cannot be computed on a scalar feature",
        }
    );
}

#[test]
fn test_scalar_statistics_rejected_even_when_undefined() {
    // No in-air points: the ratio itself would be undefined
    let points = vec![
        Point::at(0.0, 0.0, 0.0, OnSurface),
        Point::at(1.0, 0.0, 1.0, OnSurface),
    ];
    let sample = Sample::new(points).unwrap();
    let config = FeatureConfig::default();
    let request = FeatureRequest::new().statistics(&[Statistic::Mean]);

    let result = compute(&sample, &config, FeatureId::RatioOfWritingDurations, &request);
    assert!(matches!(result, Err(FeatureError::InvalidRequest { .. })));
}

#[test]
fn test_statistics_named_rejects_before_computing() {
    let err = FeatureRequest::new()
        .statistics_named(&["mean", "mode"])
        .unwrap_err();
    assert_eq!(err, FeatureError::UnsupportedStatistic("mode".to_string()));
}

#[test]
fn test_rejects_percentile_above_100() {
    let points = vec![
        Point::at(0.0, 0.0, 0.0, OnSurface),
        Point::at(1.0, 0.0, 1.0, OnSurface),
        Point::at(3.0, 0.0, 2.0, OnSurface),
        Point::at(6.0, 0.0, 3.0, OnSurface),
    ];
    let sample = Sample::new(points).unwrap();
    let config = FeatureConfig::default();
    let executor = FeatureExecutor::new(&sample, &config);
    let expected = FeatureError::UnsupportedStatistic("percentile_150".to_string());

    let request = FeatureRequest::new()
        .axis(Axis::X)
        .statistics(&[Statistic::Mean, Statistic::Percentile(150)]);
    assert_eq!(
        executor.compute(FeatureId::Velocity, &request).unwrap_err(),
        expected
    );

    // Reducing a raw result after the fact applies the same check
    let raw = executor
        .compute(FeatureId::Velocity, &FeatureRequest::new().axis(Axis::X))
        .unwrap();
    assert_eq!(raw.reduce(&[Statistic::Percentile(150)]).unwrap_err(), expected);

    // Percentile(100) is the maximum and is accepted
    let max = raw.reduce(&[Statistic::Percentile(100)]).unwrap();
    assert_eq!(max.statistic(Statistic::Percentile(100)), Some(3.0));
    assert_eq!(
        Validator::validate_statistics(&[Statistic::Percentile(101)]).unwrap_err(),
        FeatureError::UnsupportedStatistic("percentile_101".to_string())
    );
}

#[test]
fn test_crate_root_compute_matches_executor() {
    let sample = mixed_sample();
    let config = FeatureConfig::default();
    let request = FeatureRequest::new().in_air(true).statistics(&SOME_STATS);

    assert_eq!(
        handwriting_features::compute(&sample, &config, FeatureId::StrokeLength, &request),
        FeatureExecutor::new(&sample, &config).compute(FeatureId::StrokeLength, &request)
    );
}

// ============================================================================
// Dispatch Tests
// ============================================================================

#[test]
fn test_defaults_are_xy_on_surface() {
    let sample = mixed_sample();
    let config = FeatureConfig::default();
    let executor = FeatureExecutor::new(&sample, &config);

    let implicit = executor
        .compute(FeatureId::Velocity, &FeatureRequest::new())
        .unwrap();
    let explicit = executor
        .compute(
            FeatureId::Velocity,
            &FeatureRequest::new().axis(Axis::Xy).in_air(false),
        )
        .unwrap();
    assert_eq!(implicit, explicit);
}

#[test]
fn test_statistics_compose_with_raw_result() {
    let sample = mixed_sample();
    let config = FeatureConfig::default();
    let executor = FeatureExecutor::new(&sample, &config);

    for id in FeatureId::ALL.into_iter().filter(|id| !id.is_scalar()) {
        for in_air in [false, true] {
            let mut request = FeatureRequest::new();
            if id.parameters().in_air {
                request = request.in_air(in_air);
            }

            let raw = executor.compute(id, &request).unwrap();
            let reduced = executor
                .compute(id, &request.clone().statistics(&SOME_STATS))
                .unwrap();

            assert_eq!(raw.reduce(&SOME_STATS).unwrap(), reduced, "{} in_air={}", id, in_air);
        }
    }
}

#[test]
fn test_statistics_on_undefined_are_all_undefined() {
    let points = vec![Point::at(0.0, 0.0, 0.0, OnSurface)];
    let sample = Sample::new(points).unwrap();
    let config = FeatureConfig::default();
    let request = FeatureRequest::new().statistics(&SOME_STATS);

    let result = compute(&sample, &config, FeatureId::Jerk, &request).unwrap();
    let map = result.as_statistics().unwrap();

    assert_eq!(map.len(), SOME_STATS.len());
    assert!(map.iter().all(|(_, v)| v.is_none()));
}

#[test]
fn test_compute_by_name() {
    let sample = mixed_sample();
    let config = FeatureConfig::default();
    let executor = FeatureExecutor::new(&sample, &config);
    let request = FeatureRequest::new().in_air(true);

    assert_eq!(
        executor.compute_by_name("stroke_duration", &request).unwrap(),
        executor.compute(FeatureId::StrokeDuration, &request).unwrap()
    );
    assert_eq!(
        executor.compute_by_name("stroke_speed", &request).unwrap_err(),
        FeatureError::UnknownFeature("stroke_speed".to_string())
    );
}

#[test]
fn test_dispatch_is_deterministic() {
    let sample = mixed_sample();
    let config = FeatureConfig::default();
    let executor = FeatureExecutor::new(&sample, &config);

    for id in FeatureId::ALL {
        let request = FeatureRequest::new();
        let first = executor.compute(id, &request).unwrap();
        let second = executor.compute(id, &request).unwrap();
        assert_eq!(first, second, "{}", id);
    }
}

#[test]
fn test_scalar_and_array_shapes() {
    let sample = mixed_sample();
    let config = FeatureConfig::default();
    let executor = FeatureExecutor::new(&sample, &config);

    assert_eq!(
        executor
            .compute(FeatureId::WritingDuration, &FeatureRequest::new())
            .unwrap(),
        Feature::Scalar(9.0)
    );
    assert_eq!(
        executor
            .compute(FeatureId::Pressure, &FeatureRequest::new())
            .unwrap()
            .as_array()
            .map(<[_]>::len),
        Some(sample.len())
    );
}

// ============================================================================
// Output Tests
// ============================================================================

#[test]
fn test_reduce_rejects_scalar_and_reduced_results() {
    let scalar = Feature::Scalar(1.0);
    assert!(matches!(
        scalar.reduce(&[Statistic::Mean]),
        Err(FeatureError::InvalidRequest { .. })
    ));

    let reduced = Feature::Array(vec![Some(1.0)])
        .reduce(&[Statistic::Mean])
        .unwrap();
    assert_eq!(reduced.statistic(Statistic::Mean), Some(1.0));
    assert!(reduced.reduce(&[Statistic::Mean]).is_err());
}

#[test]
fn test_feature_display() {
    assert_eq!(Feature::<f64>::Undefined.to_string(), "undefined");
    assert_eq!(Feature::Scalar(1.5).to_string(), "1.500000");
    assert_eq!(
        Feature::Array(vec![Some(1.0), None]).to_string(),
        "[1.000000, undefined]"
    );
}
