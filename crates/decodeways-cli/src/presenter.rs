//! CLI result presenter.

use std::time::Duration;

use decodeways_core::DecodeReport;

use crate::output::format_details;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a successful count.
    fn present_result(&self, report: &DecodeReport, duration: Duration);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Prints the count on stdout; details and errors go to stderr so stdout
/// carries nothing but the number.
pub struct CLIResultPresenter {
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(details: bool) -> Self {
        Self { details }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, report: &DecodeReport, duration: Duration) {
        if self.details {
            for line in format_details(report, duration) {
                eprintln!("{line}");
            }
        }
        tracing::debug!(bits = report.ways.bits(), "presenting result");
        println!("{}", report.ways);
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
