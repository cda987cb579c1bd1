#![cfg(feature = "dev")]
//! Tests for the per-stroke and per-subsequence derivations.
//!
//! ## Test Organization
//!
//! 1. **Spatial** - Stroke length, height and width
//! 2. **Temporal** - Stroke and writing durations and their ratios
//! 3. **Dynamic** - Azimuth, tilt and pressure
//!
//! Most tests share one trajectory with two on-surface strokes, each
//! followed by an in-air stroke:
//!
//! | index | t | (x, y)  | pen state  |
//! |-------|---|---------|------------|
//! | 0..=2 | 0..=2 | (0,0) (3,4) (6,8)    | on surface |
//! | 3..=4 | 3..=4 | (6,5) (6,2)          | in air     |
//! | 5..=7 | 5..=7 | (10,2) (10,5) (12,5) | on surface |
//! | 8     | 8     | (12,0)               | in air     |

use approx::assert_relative_eq;

use handwriting_features::internals::algorithms::Derived;
use handwriting_features::internals::algorithms::dynamic::{azimuth, pressure, tilt};
use handwriting_features::internals::algorithms::kinematic::velocity;
use handwriting_features::internals::algorithms::spatial::{
    stroke_height, stroke_length, stroke_width,
};
use handwriting_features::internals::algorithms::temporal::{
    ratio_of_stroke_durations, ratio_of_writing_durations, stroke_duration, writing_duration,
};
use handwriting_features::internals::primitives::config::FeatureConfig;
use handwriting_features::internals::primitives::partition::PenState::{InAir, OnSurface};
use handwriting_features::internals::primitives::partition::{AngleUnit, Axis};
use handwriting_features::internals::primitives::sample::{Point, Sample};

fn two_strokes() -> Sample<f64> {
    let points = vec![
        Point::at(0.0, 0.0, 0.0, OnSurface),
        Point::at(3.0, 4.0, 1.0, OnSurface),
        Point::at(6.0, 8.0, 2.0, OnSurface),
        Point::at(6.0, 5.0, 3.0, InAir),
        Point::at(6.0, 2.0, 4.0, InAir),
        Point::at(10.0, 2.0, 5.0, OnSurface),
        Point::at(10.0, 5.0, 6.0, OnSurface),
        Point::at(12.0, 5.0, 7.0, OnSurface),
        Point::at(12.0, 0.0, 8.0, InAir),
    ];
    Sample::new(points).unwrap()
}

fn defined(derived: Derived<f64>) -> Vec<f64> {
    match derived {
        Derived::Array(values) => values.into_iter().map(|v| v.unwrap()).collect(),
        other => panic!("expected array, got {:?}", other),
    }
}

fn scalar(derived: Derived<f64>) -> f64 {
    match derived {
        Derived::Scalar(value) => value,
        other => panic!("expected scalar, got {:?}", other),
    }
}

// ============================================================================
// Spatial Tests
// ============================================================================

#[test]
fn test_stroke_length() {
    let sample = two_strokes();
    let config = FeatureConfig::default();

    let on_surface = defined(stroke_length(&sample, false, &config));
    assert_relative_eq!(on_surface[0], 10.0);
    assert_relative_eq!(on_surface[1], 5.0);

    // Single-point in-air stroke has zero length
    let in_air = defined(stroke_length(&sample, true, &config));
    assert_eq!(in_air, vec![3.0, 0.0]);
}

#[test]
fn test_stroke_height_and_width() {
    let sample = two_strokes();
    let config = FeatureConfig::default();

    assert_eq!(defined(stroke_height(&sample, false, &config)), vec![8.0, 3.0]);
    assert_eq!(defined(stroke_width(&sample, false, &config)), vec![6.0, 2.0]);
    assert_eq!(defined(stroke_width(&sample, true, &config)), vec![0.0, 0.0]);
}

#[test]
fn test_spatial_without_strokes_is_undefined() {
    let points = vec![
        Point::at(0.0, 0.0, 0.0, OnSurface),
        Point::at(1.0, 1.0, 1.0, OnSurface),
    ];
    let sample = Sample::new(points).unwrap();
    let config = FeatureConfig::default();

    assert!(stroke_length(&sample, true, &config).is_undefined());
    assert!(stroke_height(&sample, true, &config).is_undefined());
    assert!(stroke_width(&sample, true, &config).is_undefined());
}

#[test]
fn test_spatial_distance_scale() {
    let sample = two_strokes();
    let config = handwriting_features::FeatureConfigBuilder::new()
        .distance_scale(0.5)
        .build()
        .unwrap();

    let length = defined(stroke_length(&sample, false, &config));
    assert_relative_eq!(length[0], 5.0);
    assert_relative_eq!(length[1], 2.5);
    assert_eq!(defined(stroke_height(&sample, false, &config)), vec![4.0, 1.5]);
}

#[test]
fn test_velocity_spans_pen_lift() {
    let sample = two_strokes();
    let config = FeatureConfig::default();

    // The on-surface selection joins (6,8)@2 to (10,2)@5 across the lift
    let v = defined(velocity(&sample, Axis::Xy, false, &config));
    assert_eq!(v.len(), 5);
    assert_relative_eq!(v[0], 5.0);
    assert_relative_eq!(v[1], 5.0);
    assert_relative_eq!(v[2], 52f64.sqrt() / 3.0);
    assert_relative_eq!(v[3], 3.0);
    assert_relative_eq!(v[4], 2.0);
}

// ============================================================================
// Temporal Tests
// ============================================================================

#[test]
fn test_stroke_duration() {
    let sample = two_strokes();
    let config = FeatureConfig::default();

    assert_eq!(defined(stroke_duration(&sample, false, &config)), vec![2.0, 2.0]);
    assert_eq!(defined(stroke_duration(&sample, true, &config)), vec![1.0, 0.0]);
}

#[test]
fn test_ratio_of_stroke_durations_pairs_by_position() {
    let sample = two_strokes();
    let config = FeatureConfig::default();

    // Second in-air stroke is a single point, so its pair has no ratio
    assert_eq!(
        ratio_of_stroke_durations(&sample, &config),
        Derived::Array(vec![Some(2.0), None])
    );
}

#[test]
fn test_ratio_of_stroke_durations_keeps_unpaired_on_surface_stroke() {
    // on (0..2) / air (3..4) / on (5..9)
    let points = vec![
        Point::at(0.0, 0.0, 0.0, OnSurface),
        Point::at(0.0, 0.0, 2.0, OnSurface),
        Point::at(0.0, 0.0, 3.0, InAir),
        Point::at(0.0, 0.0, 4.0, InAir),
        Point::at(0.0, 0.0, 5.0, OnSurface),
        Point::at(0.0, 0.0, 9.0, OnSurface),
    ];
    let sample = Sample::new(points).unwrap();
    let config = FeatureConfig::default();

    assert_eq!(
        ratio_of_stroke_durations(&sample, &config),
        Derived::Array(vec![Some(2.0), None])
    );
    assert_eq!(defined(stroke_duration(&sample, false, &config)), vec![2.0, 4.0]);
}

#[test]
fn test_ratio_of_stroke_durations_ignores_surplus_in_air() {
    let points = vec![
        Point::at(0.0, 0.0, 0.0, InAir),
        Point::at(0.0, 0.0, 1.0, InAir),
        Point::at(0.0, 0.0, 2.0, OnSurface),
        Point::at(0.0, 0.0, 6.0, OnSurface),
        Point::at(0.0, 0.0, 7.0, InAir),
        Point::at(0.0, 0.0, 9.0, InAir),
    ];
    let sample = Sample::new(points).unwrap();
    let config = FeatureConfig::default();

    // Paired by position: the single on-surface stroke meets the first in-air stroke
    assert_eq!(
        ratio_of_stroke_durations(&sample, &config),
        Derived::Array(vec![Some(4.0)])
    );
}

#[test]
fn test_ratio_of_stroke_durations_without_in_air() {
    let points = vec![
        Point::at(0.0, 0.0, 0.0, OnSurface),
        Point::at(1.0, 0.0, 1.0, OnSurface),
    ];
    let sample = Sample::new(points).unwrap();
    let config = FeatureConfig::default();

    assert_eq!(
        ratio_of_stroke_durations(&sample, &config),
        Derived::Array(vec![None])
    );
}

#[test]
fn test_ratio_of_stroke_durations_without_on_surface_is_undefined() {
    let points = vec![
        Point::at(0.0, 0.0, 0.0, InAir),
        Point::at(1.0, 0.0, 1.0, InAir),
    ];
    let sample = Sample::new(points).unwrap();
    let config = FeatureConfig::default();

    assert!(ratio_of_stroke_durations(&sample, &config).is_undefined());
}

#[test]
fn test_writing_duration() {
    let sample = two_strokes();
    let config = FeatureConfig::default();

    // First to last point of each selection, gaps included
    assert_eq!(scalar(writing_duration(&sample, false, &config)), 7.0);
    assert_eq!(scalar(writing_duration(&sample, true, &config)), 5.0);
}

#[test]
fn test_writing_duration_empty_selection_is_zero() {
    let points = vec![
        Point::at(0.0, 0.0, 0.0, InAir),
        Point::at(1.0, 0.0, 3.0, InAir),
    ];
    let sample = Sample::new(points).unwrap();
    let config = FeatureConfig::default();

    assert_eq!(scalar(writing_duration(&sample, false, &config)), 0.0);
    assert_eq!(scalar(writing_duration(&sample, true, &config)), 3.0);

    // No on-surface points: the ratio is undefined, not zero
    assert!(ratio_of_writing_durations(&sample, &config).is_undefined());
}

#[test]
fn test_ratio_of_writing_durations() {
    let sample = two_strokes();
    let config = FeatureConfig::default();

    assert_relative_eq!(scalar(ratio_of_writing_durations(&sample, &config)), 1.4);
}

#[test]
fn test_ratio_of_writing_durations_zero_in_air() {
    let points = vec![
        Point::at(0.0, 0.0, 0.0, OnSurface),
        Point::at(1.0, 0.0, 1.0, OnSurface),
        Point::at(2.0, 0.0, 2.0, InAir),
    ];
    let sample = Sample::new(points).unwrap();
    let config = FeatureConfig::default();

    assert!(ratio_of_writing_durations(&sample, &config).is_undefined());
}

#[test]
fn test_time_scale() {
    let sample = two_strokes();
    let config = handwriting_features::FeatureConfigBuilder::new()
        .time_scale(0.001)
        .build()
        .unwrap();

    let durations = defined(stroke_duration(&sample, false, &config));
    assert_relative_eq!(durations[0], 0.002, max_relative = 1e-12);
    assert_relative_eq!(
        scalar(writing_duration(&sample, false, &config)),
        0.007,
        max_relative = 1e-12
    );

    // Ratios are unit free
    assert_relative_eq!(
        scalar(ratio_of_writing_durations(&sample, &config)),
        1.4,
        max_relative = 1e-12
    );
}

// ============================================================================
// Dynamic Tests
// ============================================================================

fn with_angles() -> Sample<f64> {
    let points = vec![
        Point::at(0.0, 0.0, 0.0, OnSurface)
            .with_angles(180.0, 45.0)
            .with_pressure(512.0),
        Point::at(1.0, 0.0, 1.0, InAir)
            .with_angles(90.0, 30.0)
            .with_pressure(0.0),
        Point::at(2.0, 0.0, 2.0, OnSurface)
            .with_angles(360.0, 60.0)
            .with_pressure(1024.0),
    ];
    Sample::new(points).unwrap()
}

#[test]
fn test_azimuth_and_tilt_select_pen_state() {
    let sample = with_angles();
    let config = FeatureConfig::default();

    assert_eq!(defined(azimuth(&sample, false, &config)), vec![180.0, 360.0]);
    assert_eq!(defined(tilt(&sample, true, &config)), vec![30.0]);
}

#[test]
fn test_angles_in_radians() {
    let sample = with_angles();
    let config = handwriting_features::FeatureConfigBuilder::new()
        .angle_unit(AngleUnit::Radians)
        .build()
        .unwrap();

    let az = defined(azimuth(&sample, false, &config));
    assert_relative_eq!(az[0], core::f64::consts::PI);
    assert_relative_eq!(az[1], 2.0 * core::f64::consts::PI);
}

#[test]
fn test_angles_empty_selection_is_undefined() {
    let points = vec![Point::at(0.0, 0.0, 0.0, OnSurface)];
    let sample = Sample::new(points).unwrap();
    let config = FeatureConfig::default();

    assert!(azimuth(&sample, true, &config).is_undefined());
    assert!(tilt(&sample, true, &config).is_undefined());
}

#[test]
fn test_pressure_covers_whole_sample() {
    let sample = with_angles();
    let config = FeatureConfig::default();

    assert_eq!(defined(pressure(&sample, &config)), vec![512.0, 0.0, 1024.0]);
}

#[test]
fn test_pressure_normalized_by_levels() {
    let sample = with_angles();
    let config = handwriting_features::FeatureConfigBuilder::new()
        .pressure_levels(1024.0)
        .build()
        .unwrap();

    assert_eq!(defined(pressure(&sample, &config)), vec![0.5, 0.0, 1.0]);
}

#[test]
fn test_pressure_empty_sample_is_undefined() {
    let sample = Sample::<f64>::new(vec![]).unwrap();
    assert!(pressure(&sample, &FeatureConfig::default()).is_undefined());
}
