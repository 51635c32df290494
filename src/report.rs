// Console output: per-dataset summaries during the run and the final timing
// report, in seconds with 10 fractional digits.

use colored::Colorize;

use crate::dataset::Dataset;
use crate::timing::SizeReport;

const PREVIEW_LEN: usize = 10;

fn preview_string(dataset: &Dataset) -> String {
    let mut rendered = format!("{:?}", dataset.preview(PREVIEW_LEN));
    if dataset.len() > PREVIEW_LEN {
        rendered.push_str("...");
    }
    rendered
}

fn found_string(found: Option<usize>) -> String {
    match found {
        Some(index) => format!("index {}", index),
        None => "not found".to_string(),
    }
}

pub fn print_dataset_summary(dataset: &Dataset, present: i64, absent: i64) {
    println!();
    println!(
        "{}",
        format!("Dataset of size {}: {}", dataset.len(), preview_string(dataset)).bold()
    );
    println!("Present target: {}", present.to_string().green());
    println!("Absent target: {}", absent.to_string().yellow());
}

pub fn print_timing_report(reports: &[SizeReport]) {
    for report in reports {
        println!();
        println!("{}", format!("Dataset size: {}", report.size).bold());
        for measurement in &report.measurements {
            let outcome = if measurement.found.is_some() {
                found_string(measurement.found).green()
            } else {
                found_string(measurement.found).red()
            };
            println!(
                "  {} search, {} target: {:.10} s ({})",
                measurement.algorithm,
                measurement.target_kind,
                measurement.elapsed.as_secs_f64(),
                outcome
            );
        }
    }
}
