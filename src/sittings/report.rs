/// Report formatters for the sitting table.
use serde::Serialize;

use super::Sittings;
use crate::curve::difficulty_coefficient;
use crate::report_helpers;

pub fn print_report(sittings: &Sittings) {
    if sittings.is_empty() {
        println!("No sittings configured.");
        return;
    }

    let width = report_helpers::max_label_width(sittings.iter().map(|(id, _)| id), 5);
    let separator = report_helpers::separator((1 + width + 2 + 7 + 2 + 10).max(32));

    println!("Sittings");
    println!("{separator}");
    println!(" {:<width$}  {:>7}  {:>10}", "Shift", "M99", "Difficulty");
    println!("{separator}");

    for (shift, m99) in sittings.iter() {
        println!(
            " {:<width$}  {:>7.1}  {:>10.3}",
            shift,
            m99,
            difficulty_coefficient(m99)
        );
    }

    println!("{separator}");
    println!(" Total ({} sittings)", sittings.len());
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    shift: &'a str,
    m99: f64,
    difficulty: f64,
}

fn to_json(sittings: &Sittings) -> Vec<JsonEntry<'_>> {
    sittings
        .iter()
        .map(|(shift, m99)| JsonEntry {
            shift,
            m99,
            difficulty: difficulty_coefficient(m99),
        })
        .collect()
}

pub fn print_json(sittings: &Sittings) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&to_json(sittings))
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
