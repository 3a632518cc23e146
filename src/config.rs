//! Runtime configuration: sitting table and score policy.
//!
//! Everything has a built-in default. A TOML file passed with `--config`
//! can replace the sitting table, the score policy, or both:
//!
//! ```toml
//! [sittings]
//! "24S1" = 170
//! "24S2" = 151
//!
//! [scores]
//! min = 0
//! max = 300
//! disallowed = [289, 293, 294, 297, 298, 299]
//! ```
//!
//! A `[sittings]` section replaces the built-in table entirely; it is not
//! merged. Missing `[scores]` keys fall back to their defaults.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{ConfigError, PredictError};
use crate::sittings::Sittings;

/// Scores that cannot be obtained under the exam's marking scheme.
pub const DEFAULT_DISALLOWED: [u32; 6] = [289, 293, 294, 297, 298, 299];

/// Which raw scores are accepted as input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorePolicy {
    pub min: u32,
    pub max: u32,
    /// Treated as an opaque list; no pattern is inferred from it.
    pub disallowed: BTreeSet<u32>,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self {
            min: 0,
            max: 300,
            disallowed: DEFAULT_DISALLOWED.into_iter().collect(),
        }
    }
}

impl ScorePolicy {
    /// Accept `marks` if it is in range and not disallowed.
    pub fn check(&self, marks: u32) -> Result<u32, PredictError> {
        if marks < self.min || marks > self.max {
            return Err(PredictError::invalid(format!(
                "marks {marks} outside {}..={}",
                self.min, self.max
            )));
        }
        if self.disallowed.contains(&marks) {
            return Err(PredictError::invalid(format!(
                "marks {marks} cannot be obtained"
            )));
        }
        Ok(marks)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidPolicy {
                min: self.min,
                max: self.max,
            });
        }
        Ok(self)
    }
}

/// On-disk layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    sittings: Option<BTreeMap<String, f64>>,
    scores: ScorePolicy,
}

/// Validated configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub sittings: Sittings,
    pub policy: ScorePolicy,
}

impl Config {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        let sittings = match file.sittings {
            Some(table) => Sittings::from_map(table)?,
            None => Sittings::builtin(),
        };
        Ok(Self {
            sittings,
            policy: file.scores.validate()?,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        info!(
            path = %path.display(),
            sittings = config.sittings.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Load `path` if given, otherwise use the built-in tables.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
