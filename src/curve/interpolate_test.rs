use super::*;

fn pt(percentile: f64, expected_score: f64) -> CurvePoint {
    CurvePoint {
        percentile,
        expected_score,
    }
}

fn simple_curve() -> Vec<CurvePoint> {
    vec![pt(99.0, 200.0), pt(90.0, 100.0), pt(50.0, 40.0), pt(0.0, 10.0)]
}

#[test]
fn above_top_returns_top_percentile() {
    assert_eq!(piecewise(&simple_curve(), 250.0), Ok(99.0));
    assert_eq!(piecewise(&simple_curve(), 200.0), Ok(99.0));
}

#[test]
fn below_bottom_returns_bottom_percentile() {
    assert_eq!(piecewise(&simple_curve(), 10.0), Ok(0.0));
    assert_eq!(piecewise(&simple_curve(), -5.0), Ok(0.0));
}

#[test]
fn interpolates_within_segment() {
    let p = piecewise(&simple_curve(), 150.0).unwrap();
    assert!((p - 94.5).abs() < 1e-12, "got {p}");

    let p = piecewise(&simple_curve(), 70.0).unwrap();
    assert!((p - 70.0).abs() < 1e-12, "got {p}");
}

#[test]
fn exact_breakpoint_hits_its_percentile() {
    let p = piecewise(&simple_curve(), 100.0).unwrap();
    assert!((p - 90.0).abs() < 1e-12, "got {p}");
}

#[test]
fn flat_segment_does_not_divide_by_zero() {
    let curve = vec![pt(99.5, 210.0), pt(99.1, 200.0), pt(99.0, 200.0), pt(0.0, 10.0)];
    let p = piecewise(&curve, 200.0).unwrap();
    assert!((p - 99.1).abs() < 1e-12, "got {p}");
    assert!(p.is_finite());
}

#[test]
fn empty_curve_is_internal_fault() {
    let err = piecewise(&[], 100.0).unwrap_err();
    assert!(err.is_internal());
}

#[test]
fn nan_score_is_internal_fault() {
    let err = piecewise(&simple_curve(), f64::NAN).unwrap_err();
    assert!(matches!(err, PredictError::Unbracketed { .. }));
    assert!(err.is_internal());
}

#[test]
fn broken_curve_is_internal_fault() {
    // a NaN point breaks every comparison around it
    let curve = vec![pt(99.0, 200.0), pt(50.0, f64::NAN), pt(0.0, 10.0)];
    let err = piecewise(&curve, 120.0).unwrap_err();
    assert_eq!(err, PredictError::Unbracketed { score: 120.0 });
}
