/// Report formatters for adjusted curves.
///
/// The table lists each percentile with its reference shape factor, the
/// effective factor after difficulty adjustment, and the expected score.
/// The anchor row is marked.
use serde::Serialize;

use super::base::{ANCHOR_PERCENTILE, BASE_CURVE};
use super::{AdjustedCurve, CurvePoint, difficulty_coefficient};
use crate::report_helpers;

/// Effective shape factor of a point: expected score over M99.
fn effective_factor(point: &CurvePoint, m99: f64) -> f64 {
    point.expected_score / m99
}

pub fn print_report(curve: &AdjustedCurve, label: &str) {
    let separator = report_helpers::separator(52);
    let m99 = curve.m99();

    println!("Adjusted Curve: {label}");
    println!("{separator}");
    println!(" M99:         {m99:.1}");
    println!(" Difficulty:  {:.3}", difficulty_coefficient(m99));
    println!("{separator}");
    println!(
        " {:>10}  {:>8}  {:>8}  {:>10}",
        "Percentile", "Base", "Factor", "Marks"
    );
    println!("{separator}");

    for (point, base) in curve.points().iter().zip(BASE_CURVE) {
        let marker = if point.percentile == ANCHOR_PERCENTILE {
            "  anchor"
        } else {
            ""
        };
        println!(
            " {:>10.2}  {:>8.3}  {:>8.3}  {:>10.2}{marker}",
            point.percentile,
            base.factor,
            effective_factor(point, m99),
            point.expected_score,
        );
    }

    println!("{separator}");
}

#[derive(Serialize)]
struct JsonPoint {
    percentile: f64,
    base_factor: f64,
    factor: f64,
    expected_score: f64,
}

#[derive(Serialize)]
struct JsonCurve<'a> {
    label: &'a str,
    m99: f64,
    difficulty: f64,
    points: Vec<JsonPoint>,
}

pub fn print_json(curve: &AdjustedCurve, label: &str) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&to_json(curve, label))
}

fn to_json<'a>(curve: &AdjustedCurve, label: &'a str) -> JsonCurve<'a> {
    let m99 = curve.m99();
    JsonCurve {
        label,
        m99,
        difficulty: difficulty_coefficient(m99),
        points: curve
            .points()
            .iter()
            .zip(BASE_CURVE)
            .map(|(p, b)| JsonPoint {
                percentile: p.percentile,
                base_factor: b.factor,
                factor: effective_factor(p, m99),
                expected_score: p.expected_score,
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
