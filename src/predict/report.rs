/// Report formatters for a single prediction.
use super::handler::Response;
use super::{Prediction, format_percentile};
use crate::report_helpers;

pub fn print_report(prediction: &Prediction) {
    let separator = report_helpers::separator(40);

    println!("Percentile Prediction");
    println!("{separator}");
    println!(" Shift:       {}", prediction.shift);
    println!(" M99:         {:.1}", prediction.m99);
    println!(" Difficulty:  {:.3}", prediction.difficulty);
    println!(" Marks:       {}", prediction.marks);
    println!("{separator}");
    println!(" Percentile:  {}", format_percentile(prediction.percentile));
}

/// Print the response body exactly as the request handler would send it.
pub fn print_json(response: &Response) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&response.body)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
