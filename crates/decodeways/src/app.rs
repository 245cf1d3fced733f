//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};

use decodeways_cli::output::write_to_file;
use decodeways_cli::{CLIResultPresenter, ResultPresenter};
use decodeways_core::ClusterCounter;

use crate::config::AppConfig;
use crate::input::read_input;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        decodeways_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let path = config
        .input
        .as_deref()
        .context("missing input file argument")?;
    let bytes = read_input(path, config.trim)?;

    let start = Instant::now();
    let report = ClusterCounter::new()
        .analyze(&bytes)
        .context("invalid input")?;
    let duration = start.elapsed();
    tracing::debug!(
        clusters = report.clusters,
        longest_cluster = report.longest_cluster,
        elapsed = ?duration,
        "count complete"
    );

    CLIResultPresenter::new(config.details).present_result(&report, duration);

    if let Some(ref output) = config.output {
        write_to_file(output, &report.ways)
            .with_context(|| format!("cannot write '{}'", output.display()))?;
        tracing::info!(path = %output.display(), "result written");
    }

    Ok(())
}
