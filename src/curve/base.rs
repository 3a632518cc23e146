//! Reference percentile curve.
//!
//! Each point maps a percentile to a shape factor: the expected score at
//! that percentile divided by the sitting's M99. Factors are calibrated
//! against historical score distributions and shared by every sitting;
//! only M99 varies per sitting. Points are ordered strictly descending by
//! percentile, from 99.99 down to 0.0.

/// A single point on the reference curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePoint {
    /// Percentile rank (0.0–99.99).
    pub percentile: f64,
    /// Expected score at this percentile as a multiple of M99.
    pub factor: f64,
}

/// Percentile whose expected score is pinned to M99.
pub const ANCHOR_PERCENTILE: f64 = 99.0;

/// Highest percentile the curve reports.
pub const TOP_PERCENTILE: f64 = 99.99;

const fn point(percentile: f64, factor: f64) -> BasePoint {
    BasePoint { percentile, factor }
}

/// The 33-point reference curve.
///
/// Upper tail (above 99.0) is sampled every 0.1 percentile, the band from
/// 99.0 to 95.0 every 0.5, then 95.0 to 90.0 every 1.0 (with 94.0 as the
/// first step) and the bulk every 10.
pub const BASE_CURVE: &[BasePoint] = &[
    point(99.99, 1.45),
    point(99.9, 1.33),
    point(99.8, 1.25),
    point(99.7, 1.20),
    point(99.6, 1.15),
    point(99.5, 1.12),
    point(99.4, 1.09),
    point(99.3, 1.06),
    point(99.2, 1.04),
    point(99.1, 1.02),
    point(ANCHOR_PERCENTILE, 1.00),
    point(98.5, 0.927),
    point(98.0, 0.876),
    point(97.5, 0.824),
    point(97.0, 0.788),
    point(96.5, 0.756),
    point(96.0, 0.725),
    point(95.5, 0.699),
    point(95.0, 0.674),
    point(94.0, 0.637),
    point(93.0, 0.596),
    point(92.0, 0.560),
    point(91.0, 0.534),
    point(90.0, 0.508),
    point(80.0, 0.400),
    point(70.0, 0.320),
    point(60.0, 0.260),
    point(50.0, 0.210),
    point(40.0, 0.170),
    point(30.0, 0.140),
    point(20.0, 0.110),
    point(10.0, 0.080),
    point(0.0, 0.040),
];
