//! Score → percentile lookup on an adjusted curve.

use tracing::error;

use super::CurvePoint;
use crate::error::PredictError;

/// Piecewise linear interpolation over a curve ordered by descending
/// percentile (and non-increasing expected score).
///
/// Scores at or above the first point return its percentile; scores at or
/// below the last point return its percentile. Anything else is placed on
/// the first segment whose endpoints bracket it.
///
/// Returns [`PredictError::Unbracketed`] if no segment brackets the score,
/// which only happens for an empty or non-monotonic curve or a NaN score.
pub fn piecewise(points: &[CurvePoint], score: f64) -> Result<f64, PredictError> {
    let (Some(top), Some(bottom)) = (points.first(), points.last()) else {
        error!(score, "cannot interpolate on an empty curve");
        return Err(PredictError::Unbracketed { score });
    };

    if score >= top.expected_score {
        return Ok(top.percentile);
    }
    if score <= bottom.expected_score {
        return Ok(bottom.percentile);
    }

    for w in points.windows(2) {
        let (hi, lo) = (&w[0], &w[1]);
        if score <= hi.expected_score && score >= lo.expected_score {
            // flat segment: score sits on both endpoints
            if hi.expected_score == lo.expected_score {
                return Ok(hi.percentile);
            }
            return Ok(hi.percentile
                + (score - hi.expected_score) * (lo.percentile - hi.percentile)
                    / (lo.expected_score - hi.expected_score));
        }
    }

    error!(
        score,
        top = top.expected_score,
        bottom = bottom.expected_score,
        "no curve segment brackets the score; curve is not monotonic"
    );
    Err(PredictError::Unbracketed { score })
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod tests;
