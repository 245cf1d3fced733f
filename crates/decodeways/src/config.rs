//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use decodeways_core::exit_codes;

/// DecodeWays-rs: counts the ways a digit string decodes under A=1 … Z=26.
///
/// Prints the number of decodings of the digits stored in FILE.
#[derive(Parser, Debug)]
#[command(name = "decodeways", version, about)]
pub struct AppConfig {
    /// File holding the digit string.
    #[arg(
        value_name = "FILE",
        env = "DECODEWAYS_INPUT",
        required_unless_present = "completion"
    )]
    pub input: Option<PathBuf>,

    /// Strip trailing whitespace (such as a final newline) before counting.
    #[arg(long)]
    pub trim: bool,

    /// Print scan statistics to stderr.
    #[arg(short, long)]
    pub details: bool,

    /// Also write the result to this file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    ///
    /// Usage errors exit with [`exit_codes::ERROR_GENERIC`]; `--help` and
    /// `--version` exit successfully.
    #[must_use]
    pub fn parse() -> Self {
        match <Self as Parser>::try_parse() {
            Ok(config) => config,
            Err(err) if err.use_stderr() => {
                let _ = err.print();
                std::process::exit(exit_codes::ERROR_GENERIC);
            }
            Err(err) => err.exit(),
        }
    }
}
