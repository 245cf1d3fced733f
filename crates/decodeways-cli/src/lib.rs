//! # decodeways-cli
//!
//! CLI output formatting, result presentation, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::{CLIResultPresenter, ResultPresenter};
