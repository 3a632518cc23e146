//! Percentile prediction for a sitting and raw score.
//!
//! `Predictor` owns the validated tables and runs the full pipeline:
//! input validation, sitting lookup, curve generation, interpolation and
//! the final clamp to `[0, 99.99]`. `handler` wraps it in a
//! request/response shape; `pp predict` prints the result.

pub mod handler;
mod report;

use std::error::Error;

use serde::Serialize;

use crate::config::{Config, ScorePolicy};
use crate::curve::{TOP_PERCENTILE, difficulty_coefficient, generate_curve};
use crate::error::PredictError;
use crate::sittings::Sittings;
use handler::PredictQuery;
use report::{print_json, print_report};

/// A successful prediction with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub shift: String,
    pub m99: f64,
    pub difficulty: f64,
    pub marks: u32,
    pub percentile: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Predictor {
    sittings: Sittings,
    policy: ScorePolicy,
}

impl From<Config> for Predictor {
    fn from(config: Config) -> Self {
        Self::new(config.sittings, config.policy)
    }
}

impl Predictor {
    pub fn new(sittings: Sittings, policy: ScorePolicy) -> Self {
        Self { sittings, policy }
    }

    pub fn sittings(&self) -> &Sittings {
        &self.sittings
    }

    /// Require a non-blank shift id.
    pub fn validate_shift(raw: Option<&str>) -> Result<&str, PredictError> {
        match raw.map(str::trim) {
            Some(shift) if !shift.is_empty() => Ok(shift),
            _ => Err(PredictError::invalid("shift is required")),
        }
    }

    /// Parse raw marks: a whole number within the policy range and not in
    /// the disallowed set. `"170"` and `"170.0"` are both accepted.
    pub fn validate_marks(&self, raw: Option<&str>) -> Result<u32, PredictError> {
        let raw = match raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(PredictError::invalid("marks are required")),
        };

        let value: f64 = raw
            .parse()
            .map_err(|_| PredictError::invalid(format!("marks {raw:?} are not a number")))?;
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(PredictError::invalid(format!(
                "marks {raw:?} are not a whole number"
            )));
        }
        if value < 0.0 || value > f64::from(u32::MAX) {
            return Err(PredictError::invalid(format!(
                "marks {raw:?} outside {}..={}",
                self.policy.min, self.policy.max
            )));
        }

        self.policy.check(value as u32)
    }

    /// Predict the percentile for `marks` in sitting `shift`.
    pub fn predict(&self, shift: &str, marks: u32) -> Result<Prediction, PredictError> {
        let marks = self.policy.check(marks)?;
        let m99 = self.sittings.lookup(shift)?;
        let percentile = predict_percentile(m99, f64::from(marks))?;

        Ok(Prediction {
            shift: shift.to_string(),
            m99,
            difficulty: difficulty_coefficient(m99),
            marks,
            percentile,
        })
    }

    /// Validate raw query parameters and predict.
    pub fn predict_query(&self, query: &PredictQuery) -> Result<Prediction, PredictError> {
        let shift = Self::validate_shift(query.shift.as_deref())?;
        let marks = self.validate_marks(query.marks.as_deref())?;
        self.predict(shift, marks)
    }
}

/// Percentile for `score` on the curve of a sitting with reference value
/// `m99`, clamped to `[0, 99.99]`.
pub fn predict_percentile(m99: f64, score: f64) -> Result<f64, PredictError> {
    let percentile = generate_curve(m99).interpolate(score)?;
    Ok(percentile.clamp(0.0, TOP_PERCENTILE))
}

/// Two-decimal rendering used in responses.
pub fn format_percentile(percentile: f64) -> String {
    format!("{percentile:.2}")
}

pub fn run(predictor: &Predictor, shift: &str, marks: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let query = PredictQuery {
        shift: Some(shift.to_string()),
        marks: Some(marks.to_string()),
    };

    if json {
        let response = handler::handle(predictor, &query);
        print_json(&response)?;
        if !response.is_success() {
            return Err(format!("request failed with status {}", response.status).into());
        }
        return Ok(());
    }

    match predictor.predict_query(&query) {
        Ok(prediction) => print_report(&prediction),
        Err(err) if err.is_internal() => return Err(format!("internal error: {err}").into()),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
