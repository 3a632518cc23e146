use super::*;
use proptest::prelude::*;

fn factor_at(percentile: f64, m99: f64) -> f64 {
    let point = BASE_CURVE.iter().find(|p| p.percentile == percentile).unwrap();
    adjusted_factor(point, m99)
}

#[test]
fn anchor_factor_is_one_for_any_reference() {
    for m99 in [100.0, 151.0, 170.0, 193.0, 236.0, 280.0] {
        assert_eq!(factor_at(99.0, m99), 1.0);
    }
}

#[test]
fn hardest_sitting_tail_uses_full_inflation() {
    let f = factor_at(99.9, 151.0);
    assert!((f - 1.33 * 1.08).abs() < 1e-12, "got {f}");
}

#[test]
fn easiest_sitting_tail_uses_reduced_inflation() {
    let f = factor_at(99.9, 236.0);
    assert!((f - 1.33 * 0.88).abs() < 1e-12, "got {f}");
}

#[test]
fn body_compression_bounds() {
    let hard = factor_at(50.0, 151.0);
    let easy = factor_at(50.0, 236.0);
    assert!((hard - 0.210 * 0.96).abs() < 1e-12, "got {hard}");
    assert!((easy - 0.210).abs() < 1e-12, "got {easy}");
}

#[test]
fn curve_has_one_point_per_reference_point() {
    let curve = generate_curve(170.0);
    assert_eq!(curve.points().len(), BASE_CURVE.len());
    for (p, b) in curve.points().iter().zip(BASE_CURVE) {
        assert_eq!(p.percentile, b.percentile);
    }
}

#[test]
fn curve_passes_through_anchor() {
    for m99 in [151.0, 170.0, 172.0, 193.0, 211.0, 236.0] {
        let curve = generate_curve(m99);
        let anchor = curve.point_at(ANCHOR_PERCENTILE).unwrap();
        assert_eq!(anchor.expected_score, m99);
    }
}

#[test]
fn hard_sitting_points_match_formula_exactly() {
    let m99 = 170.0;
    let curve = generate_curve(m99);
    for (p, b) in curve.points().iter().zip(BASE_CURVE) {
        assert_eq!(p.expected_score, adjusted_factor(b, m99) * m99);
    }
}

#[test]
fn easy_sitting_lifts_low_tail_to_anchor() {
    let m99 = 236.0;
    let curve = generate_curve(m99);
    // 1.02..1.12 times 0.88 all fall below 1.0
    for pct in [99.1, 99.2, 99.3, 99.4, 99.5] {
        assert_eq!(curve.point_at(pct).unwrap().expected_score, m99, "p{pct}");
    }
    // 1.15 * 0.88 stays above the anchor
    let p996 = curve.point_at(99.6).unwrap().expected_score;
    assert!((p996 - 1.15 * 0.88 * m99).abs() < 1e-9, "got {p996}");
}

#[test]
fn enforce_monotonic_counts_changes() {
    let mut points = vec![
        CurvePoint {
            percentile: 99.0,
            expected_score: 150.0,
        },
        CurvePoint {
            percentile: 98.0,
            expected_score: 160.0,
        },
        CurvePoint {
            percentile: 0.0,
            expected_score: 10.0,
        },
    ];
    assert_eq!(enforce_monotonic(&mut points), 1);
    assert_eq!(points[0].expected_score, 160.0);
    assert_eq!(points[2].expected_score, 10.0);
}

#[test]
fn enforce_monotonic_handles_empty() {
    let mut points: Vec<CurvePoint> = Vec::new();
    assert_eq!(enforce_monotonic(&mut points), 0);
}

proptest! {
    #[test]
    fn no_point_lifted_up_to_190(m99 in 1.0f64..=190.0) {
        let mut points: Vec<CurvePoint> = BASE_CURVE
            .iter()
            .map(|b| CurvePoint {
                percentile: b.percentile,
                expected_score: adjusted_factor(b, m99) * m99,
            })
            .collect();
        prop_assert_eq!(enforce_monotonic(&mut points), 0);

        let curve = generate_curve(m99);
        for (p, b) in curve.points().iter().zip(BASE_CURVE) {
            prop_assert_eq!(p.expected_score, adjusted_factor(b, m99) * m99);
        }
    }
}
