//! DecodeWays-rs library: application logic for the decode-ways counter.

pub mod app;
pub mod config;
pub mod errors;
pub mod input;
