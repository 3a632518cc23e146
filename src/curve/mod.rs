//! Difficulty-adjusted percentile curves.
//!
//! A sitting's curve is built from the shared reference curve and its M99
//! (`generator`), then used to turn a raw score into a percentile
//! (`interpolate`). Curves are built per request and never cached. Invoked
//! directly via `pp curve` and indirectly by every prediction.

pub mod base;
pub mod difficulty;
pub mod generator;
pub mod interpolate;
mod report;

use std::error::Error;

use serde::Serialize;

use crate::error::PredictError;
use crate::sittings::{self, Sittings};

pub use base::TOP_PERCENTILE;
pub use difficulty::difficulty_coefficient;
pub use generator::generate_curve;
use report::{print_json, print_report};

/// A point on an adjusted curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub percentile: f64,
    /// Raw score expected at this percentile.
    pub expected_score: f64,
}

/// The 33-point curve for one reference value, ordered by descending
/// percentile with non-increasing expected scores.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedCurve {
    m99: f64,
    points: Vec<CurvePoint>,
}

impl AdjustedCurve {
    pub fn m99(&self) -> f64 {
        self.m99
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    #[cfg(test)]
    pub fn point_at(&self, percentile: f64) -> Option<&CurvePoint> {
        self.points.iter().find(|p| p.percentile == percentile)
    }

    /// Percentile for a raw score on this curve.
    pub fn interpolate(&self, score: f64) -> Result<f64, PredictError> {
        interpolate::piecewise(&self.points, score)
    }
}

/// Print the adjusted curve for a sitting from the table, or for an ad-hoc
/// reference value.
pub fn run(
    table: &Sittings,
    shift: Option<&str>,
    m99: Option<f64>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let (label, m99) = match (shift, m99) {
        (Some(shift), _) => (shift.to_string(), table.lookup(shift)?),
        (None, Some(value)) => (
            format!("M99 {value}"),
            sittings::validate_reference("--m99", value)?,
        ),
        (None, None) => return Err("either a shift or --m99 is required".into()),
    };

    let curve = generate_curve(m99);

    if json {
        print_json(&curve, &label)?;
    } else {
        print_report(&curve, &label);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
