//! # decodeways-core
//!
//! Counts the ways a digit string can be decoded under A=1 … Z=26.
//! Maximal runs of ambiguous digit pairs ("clusters") contribute Fibonacci
//! factors; the count is their product, computed exactly with `BigUint`.

pub mod batch;
pub mod constants;
pub mod counter;
pub mod digits;
pub mod error;
pub mod fib_cache;

// Re-exports
pub use batch::count_all;
pub use constants::exit_codes;
pub use counter::{ClusterCounter, DecodeReport};
pub use error::DecodeError;
pub use fib_cache::{FibonacciCache, FibonacciSource, SharedFibonacciCache};

use num_bigint::BigUint;

/// Count the decodings of `sequence` with a one-shot counter.
///
/// For many inputs, keep a [`ClusterCounter`] around so its Fibonacci table
/// is reused.
///
/// # Example
/// ```
/// assert_eq!(decodeways_core::count_decodings(b"11111").unwrap().to_string(), "8");
/// assert!(decodeways_core::count_decodings(b"30").is_err());
/// ```
pub fn count_decodings(sequence: &[u8]) -> Result<BigUint, DecodeError> {
    ClusterCounter::new().count(sequence)
}
