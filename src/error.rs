//! Error types for prediction and configuration loading.
//!
//! `PredictError` separates caller mistakes (bad input, unknown sitting)
//! from internal faults (a curve that fails to bracket a score).
//! `ConfigError` covers everything that can go wrong before the first
//! prediction: reading, parsing and validating the TOML tables.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    /// Missing shift, or marks that are missing, malformed, out of range
    /// or in the disallowed set.
    #[error("invalid shift or marks: {reason}")]
    InvalidInput { reason: String },

    /// The shift is well-formed but has no reference value.
    #[error("no data for shift {shift:?}")]
    UnknownSitting { shift: String },

    /// No consecutive pair of curve points contains the score. Only
    /// reachable when the adjusted curve is not monotonic (or the score is
    /// NaN), so this is a programming error rather than a user error.
    #[error("adjusted curve does not bracket score {score}")]
    Unbracketed { score: f64 },
}

impl PredictError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// True for faults that indicate a bug rather than a bad request.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Unbracketed { .. })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("sitting {shift:?} has invalid reference value {value} (must be finite and positive)")]
    InvalidReference { shift: String, value: f64 },

    #[error("score range {min}..={max} is empty")]
    InvalidPolicy { min: u32, max: u32 },

    #[error("sitting table is empty")]
    Empty,
}
