//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use num_bigint::BigUint;

use decodeways_core::DecodeReport;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Lines describing the scan behind a result.
#[must_use]
pub fn format_details(report: &DecodeReport, duration: Duration) -> Vec<String> {
    vec![
        format!("Input length: {}", format_number(report.length)),
        format!("Clusters: {}", format_number(report.clusters)),
        format!("Longest cluster: {}", format_number(report.longest_cluster)),
        format!("Result digits: {}", report.ways.to_string().len()),
        format!("Result bits: {}", report.ways.bits()),
        format!("Duration: {}", format_duration(duration)),
    ]
}

/// Write the decimal result to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, value: &BigUint) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{value}")?;
    Ok(())
}
