//! Sitting reference table.
//!
//! Maps each exam sitting to its M99, the raw score at the 99th
//! percentile for that sitting. The built-in table is embedded; a
//! configuration file can replace it at startup. The table is read-only
//! once built. Listed via `pp sittings`.

mod report;

use std::collections::BTreeMap;
use std::error::Error;

use crate::error::{ConfigError, PredictError};
use report::{print_json, print_report};

/// Built-in reference values.
pub const DEFAULT_SITTINGS: &[(&str, f64)] = &[
    ("21S1", 236.0),
    ("21S2", 211.0),
    ("22S1", 203.0),
    ("22S2", 212.0),
    ("23S1", 193.0),
    ("23S2", 191.0),
    ("24S1", 170.0),
    ("24S2", 151.0),
    ("28S1", 161.0),
    ("28S2", 172.0),
];

/// Immutable mapping from sitting id to M99.
#[derive(Debug, Clone, PartialEq)]
pub struct Sittings {
    table: BTreeMap<String, f64>,
}

impl Default for Sittings {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Sittings {
    pub fn builtin() -> Self {
        Self {
            table: DEFAULT_SITTINGS
                .iter()
                .map(|&(shift, m99)| (shift.to_string(), m99))
                .collect(),
        }
    }

    /// Build a table from loaded values, rejecting empty tables and
    /// reference values that are not finite and positive.
    pub fn from_map(table: BTreeMap<String, f64>) -> Result<Self, ConfigError> {
        if table.is_empty() {
            return Err(ConfigError::Empty);
        }
        for (shift, &m99) in &table {
            validate_reference(shift, m99)?;
        }
        Ok(Self { table })
    }

    pub fn get(&self, shift: &str) -> Option<f64> {
        self.table.get(shift).copied()
    }

    /// Reference value for `shift`, or the "no data" error.
    pub fn lookup(&self, shift: &str) -> Result<f64, PredictError> {
        self.get(shift).ok_or_else(|| PredictError::UnknownSitting {
            shift: shift.to_string(),
        })
    }

    /// Sittings in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.table.iter().map(|(shift, &m99)| (shift.as_str(), m99))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Check that `m99` can serve as a reference value.
pub fn validate_reference(shift: &str, m99: f64) -> Result<f64, ConfigError> {
    if m99.is_finite() && m99 > 0.0 {
        Ok(m99)
    } else {
        Err(ConfigError::InvalidReference {
            shift: shift.to_string(),
            value: m99,
        })
    }
}

pub fn run(sittings: &Sittings, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        print_json(sittings)?;
    } else {
        print_report(sittings);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
