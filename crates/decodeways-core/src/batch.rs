//! Parallel counting of independent inputs over one shared cache.

use num_bigint::BigUint;
use rayon::prelude::*;

use crate::counter::ClusterCounter;
use crate::error::DecodeError;
use crate::fib_cache::SharedFibonacciCache;

/// Count every input on the rayon pool, sharing one Fibonacci table.
///
/// Results come back in input order; each equals what a fresh
/// [`ClusterCounter`] returns for the same bytes.
pub fn count_all(inputs: &[&[u8]]) -> Vec<Result<BigUint, DecodeError>> {
    let cache = SharedFibonacciCache::new();
    count_all_with(&cache, inputs)
}

/// Like [`count_all`], but grows a caller-owned shared cache.
pub fn count_all_with(
    cache: &SharedFibonacciCache,
    inputs: &[&[u8]],
) -> Vec<Result<BigUint, DecodeError>> {
    inputs
        .par_iter()
        .map(|input| ClusterCounter::with_cache(cache).count(input))
        .collect()
}
