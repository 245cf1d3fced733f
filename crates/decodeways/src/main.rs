//! DecodeWays-rs: counts the ways a digit string decodes under A=1 … Z=26.

use std::process::ExitCode;

use decodeways_cli::{CLIResultPresenter, ResultPresenter};
use decodeways_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            CLIResultPresenter::new(false).present_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    }
}
