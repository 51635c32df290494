use search_comparator::cli::{self, CliError};
use search_comparator::dataset::Dataset;
use search_comparator::report;
use search_comparator::timing::{self, SizeReport};

fn main() -> Result<(), CliError> {
    let input = cli::prompt("Enter dataset sizes (comma-separated): ")?;
    let sizes = cli::parse_sizes(&input)?;

    let mut rng = rand::thread_rng();
    let mut reports = Vec::with_capacity(sizes.len());

    for size in sizes {
        let dataset = Dataset::with_rng(size, &mut rng);
        // Sizes are validated non-zero, so a present target always exists.
        let present = match dataset.present_target(&mut rng) {
            Some(target) => target,
            None => continue,
        };
        let absent = dataset.absent_target();

        report::print_dataset_summary(&dataset, present, absent);

        let measurements = timing::run_comparison(&dataset, present, absent);
        reports.push(SizeReport { size, measurements });
    }

    report::print_timing_report(&reports);
    Ok(())
}
