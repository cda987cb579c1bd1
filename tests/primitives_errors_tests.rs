#![cfg(feature = "dev")]

use handwriting_features::internals::primitives::errors::FeatureError;

#[test]
fn test_feature_error_display() {
    // InvalidParameter
    let err = FeatureError::InvalidParameter {
        parameter: "axis",
        reason: "'z' is not one of \"x\", \"y\", \"xy\"".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "Invalid parameter 'axis': 'z' is not one of \"x\", \"y\", \"xy\""
    );

    // UnsupportedStatistic
    let err = FeatureError::UnsupportedStatistic("mode".to_string());
    assert_eq!(format!("{}", err), "Unsupported statistic: 'mode'");

    // InvalidRequest
    let err = FeatureError::InvalidRequest {
        feature: "writing_duration",
        reason: "statistics cannot be computed on a scalar feature",
    };
    assert_eq!(
        format!("{}", err),
        "Invalid request for feature 'writing_duration': statistics cannot be computed on a scalar feature"
    );

    // UnknownFeature
    let err = FeatureError::UnknownFeature("speed".to_string());
    assert_eq!(format!("{}", err), "Unknown feature: 'speed'");

    // NonMonotonicTimestamps
    let err = FeatureError::NonMonotonicTimestamps { index: 4 };
    assert_eq!(
        format!("{}", err),
        "Timestamps must be non-decreasing: point 4 precedes its predecessor"
    );

    // InvalidNumericValue
    let err = FeatureError::InvalidNumericValue("timestamp[1]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: timestamp[1]=NaN");

    // MismatchedColumns
    let err = FeatureError::MismatchedColumns {
        column: "tilt",
        expected: 10,
        got: 9,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: column 'tilt' has 9 points, x has 10"
    );

    // InvalidScale
    let err = FeatureError::InvalidScale {
        parameter: "time_scale",
        value: -1.0,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid time_scale: -1 (must be > 0 and finite)"
    );

    // DuplicateParameter
    let err = FeatureError::DuplicateParameter {
        parameter: "angle_unit",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'angle_unit' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_feature_error_properties() {
    let err1 = FeatureError::UnsupportedStatistic("foo".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, FeatureError::UnknownFeature("foo".to_string()));
}

#[cfg(feature = "std")]
#[test]
fn test_feature_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<FeatureError>();
}
