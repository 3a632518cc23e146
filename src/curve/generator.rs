//! Difficulty-adjusted curve generation.
//!
//! Scales the reference curve by the sitting's difficulty: the upper tail
//! is inflated more for hard sittings (top scorers are packed into a
//! narrower band), the bulk is lightly compressed. The anchor at 99.0 is
//! never scaled, so every curve passes through `(99.0, M99)`.

use tracing::debug;

use super::base::{ANCHOR_PERCENTILE, BASE_CURVE, BasePoint};
use super::difficulty::difficulty_coefficient;
use super::{AdjustedCurve, CurvePoint};

/// Multiplier applied to shape factors above the anchor.
pub fn tail_inflation(t: f64) -> f64 {
    1.08 - 0.20 * t
}

/// Multiplier applied to shape factors below the anchor.
pub fn body_compression(t: f64) -> f64 {
    0.96 + 0.04 * t
}

/// Shape factor of `point` after adjusting for the difficulty implied by `m99`.
pub fn adjusted_factor(point: &BasePoint, m99: f64) -> f64 {
    let t = difficulty_coefficient(m99);

    if point.percentile == ANCHOR_PERCENTILE {
        return 1.0;
    }

    if point.percentile > ANCHOR_PERCENTILE {
        return point.factor * tail_inflation(t);
    }

    point.factor * body_compression(t)
}

/// Build the adjusted curve for a sitting with reference value `m99`.
///
/// Points keep the reference curve's descending-percentile order. For easy
/// sittings the tail inflation drops the lowest tail points below the
/// anchor; those are lifted to the score of the point beneath them so the
/// curve stays non-increasing. The anchor itself is never lowered.
///
/// The lift kicks in for `t` above about 0.49 (M99 above about 193), so
/// predictions for those sittings differ from a straight scan of the
/// unlifted curve: 21S1 (M99 236) at 230 marks gives about 98.83 here,
/// against about 99.46 on the unlifted curve. Moving a sitting across that
/// threshold in the table shifts its upper-tail predictions accordingly.
pub fn generate_curve(m99: f64) -> AdjustedCurve {
    let mut points: Vec<CurvePoint> = BASE_CURVE
        .iter()
        .map(|p| CurvePoint {
            percentile: p.percentile,
            expected_score: adjusted_factor(p, m99) * m99,
        })
        .collect();

    let lifted = enforce_monotonic(&mut points);
    debug!(
        m99,
        t = difficulty_coefficient(m99),
        lifted,
        "generated adjusted curve"
    );

    AdjustedCurve { m99, points }
}

/// Raise every point to at least the expected score of the point after it.
/// Returns the number of points changed.
pub(crate) fn enforce_monotonic(points: &mut [CurvePoint]) -> usize {
    let mut lifted = 0;
    for i in (0..points.len().saturating_sub(1)).rev() {
        let floor = points[i + 1].expected_score;
        if points[i].expected_score < floor {
            points[i].expected_score = floor;
            lifted += 1;
        }
    }
    lifted
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
