//! Difficulty normalization.
//!
//! Maps a sitting's M99 onto `t` in `[0, 1]`, where 0 is the hardest
//! sitting on record and 1 the easiest. Values outside the historical
//! envelope are clamped.

/// M99 of the hardest sitting on record (`t = 0`).
pub const HARDEST_M99: f64 = 151.0;

/// M99 of the easiest sitting on record (`t = 1`).
pub const EASIEST_M99: f64 = 236.0;

/// Normalized difficulty coefficient for a reference value.
pub fn difficulty_coefficient(m99: f64) -> f64 {
    ((m99 - HARDEST_M99) / (EASIEST_M99 - HARDEST_M99)).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "difficulty_test.rs"]
mod tests;
