//! Single-pass validator and decode-way counter.
//!
//! The scan splits the input into maximal clusters of ambiguous digit pairs.
//! A cluster of `k` ambiguous pairs spans `k + 1` digits and decodes in
//! F(k + 2) ways; clusters are independent, so the total is the product of
//! their factors. Everything outside a cluster decodes exactly one way.

use num_bigint::BigUint;
use num_traits::One;

use crate::digits::{accepts_zero, is_ambiguous_pair, is_digit, is_zero};
use crate::error::DecodeError;
use crate::fib_cache::{FibonacciCache, FibonacciSource};

/// Outcome of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    /// Number of distinct decodings.
    pub ways: BigUint,
    /// Input length in bytes.
    pub length: usize,
    /// Number of maximal ambiguous clusters.
    pub clusters: usize,
    /// Ambiguous-pair count of the longest cluster (0 if there is none).
    pub longest_cluster: usize,
}

/// Validates digit strings and counts their decodings.
///
/// Holds the Fibonacci table it multiplies by, so repeated calls reuse the
/// values computed for earlier inputs.
///
/// # Example
/// ```
/// use decodeways_core::counter::ClusterCounter;
/// let mut counter = ClusterCounter::new();
/// assert_eq!(counter.count(b"226").unwrap().to_string(), "3");
/// ```
#[derive(Debug)]
pub struct ClusterCounter<C = FibonacciCache> {
    cache: C,
}

impl ClusterCounter {
    /// Create a counter with its own fresh cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cache(FibonacciCache::new())
    }
}

impl Default for ClusterCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FibonacciSource> ClusterCounter<C> {
    /// Create a counter backed by the given Fibonacci source.
    pub fn with_cache(cache: C) -> Self {
        Self { cache }
    }

    /// Count the decodings of `sequence`.
    pub fn count(&mut self, sequence: &[u8]) -> Result<BigUint, DecodeError> {
        self.analyze(sequence).map(|report| report.ways)
    }

    /// Count the decodings of `sequence` and collect cluster statistics.
    pub fn analyze(&mut self, sequence: &[u8]) -> Result<DecodeReport, DecodeError> {
        let mut ways = BigUint::one();
        let mut clusters = 0;
        let mut longest_cluster = 0;

        scan(sequence, |len| {
            self.cache.multiply_by(&mut ways, len + 2);
            clusters += 1;
            longest_cluster = longest_cluster.max(len);
        })?;

        Ok(DecodeReport {
            ways,
            length: sequence.len(),
            clusters,
            longest_cluster,
        })
    }

    /// Borrow the underlying Fibonacci source.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Consume the counter and return its Fibonacci source.
    pub fn into_cache(self) -> C {
        self.cache
    }
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    OutsideCluster,
    InClusterRun(usize),
}

/// Validate `sequence` left to right, calling `on_cluster` with the length of
/// each maximal ambiguous cluster as soon as it closes.
///
/// Stops at the first invalid byte. A cluster still open at the end of input
/// is flushed through the same callback.
fn scan(sequence: &[u8], mut on_cluster: impl FnMut(usize)) -> Result<(), DecodeError> {
    let (&first, rest) = sequence.split_first().ok_or(DecodeError::EmptyInput)?;
    if is_zero(first) {
        return Err(DecodeError::LeadingZero);
    }
    if !is_digit(first) {
        return Err(DecodeError::InvalidStartCharacter { found: first });
    }

    let mut state = ScanState::OutsideCluster;
    let mut prev = first;

    for (position, &b) in rest.iter().enumerate() {
        if !is_digit(b) {
            return Err(DecodeError::NonDigitCharacter { found: b, position });
        }
        if is_zero(b) && !accepts_zero(prev) {
            return Err(DecodeError::InvalidZeroPlacement {
                preceding: char::from(prev),
                position,
            });
        }

        state = match (state, is_ambiguous_pair(prev, b)) {
            (ScanState::OutsideCluster, true) => ScanState::InClusterRun(1),
            (ScanState::InClusterRun(len), true) => ScanState::InClusterRun(len + 1),
            (ScanState::InClusterRun(len), false) => {
                on_cluster(len);
                ScanState::OutsideCluster
            }
            (ScanState::OutsideCluster, false) => ScanState::OutsideCluster,
        };
        prev = b;
    }

    if let ScanState::InClusterRun(len) = state {
        on_cluster(len);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fib_cache::SharedFibonacciCache;

    fn count(input: &str) -> Result<BigUint, DecodeError> {
        ClusterCounter::new().count(input.as_bytes())
    }

    fn ways(input: &str) -> u64 {
        u64::try_from(count(input).unwrap()).unwrap()
    }

    #[test]
    fn known_scenarios() {
        assert_eq!(ways("12"), 2);
        assert_eq!(ways("226"), 3);
        assert_eq!(ways("10"), 1);
        assert_eq!(ways("111"), 3);
    }

    #[test]
    fn runs_of_ones_follow_fibonacci() {
        let expected = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233];
        for (i, want) in expected.iter().enumerate() {
            let input = "1".repeat(i + 1);
            assert_eq!(ways(&input), *want, "{input}");
        }
    }

    #[test]
    fn non_ambiguous_strings_count_one() {
        for input in ["1", "9", "3456789", "27", "7391"] {
            assert_eq!(ways(input), 1, "{input}");
        }
    }

    #[test]
    fn ten_and_twenty_decode_one_way() {
        for input in ["10", "20", "101", "2010", "310", "3103"] {
            assert_eq!(ways(input), 1, "{input}");
        }
    }

    #[test]
    fn disjoint_clusters_multiply() {
        // "12" | 7 | "111": 2 * 3
        assert_eq!(ways("127111"), 6);
        assert_eq!(ways("12") * ways("111"), ways("127111"));
        // 23 is ambiguous, so "123" is one cluster of two pairs
        assert_eq!(ways("123111"), 3 * 3);
    }

    #[test]
    fn trailing_cluster_is_flushed() {
        let report = ClusterCounter::new().analyze(b"3111").unwrap();
        assert_eq!(report.ways, BigUint::from(3u32));
        assert_eq!(report.clusters, 1);
        assert_eq!(report.longest_cluster, 2);
    }

    #[test]
    fn report_statistics() {
        let report = ClusterCounter::new().analyze(b"12711119").unwrap();
        assert_eq!(report.length, 8);
        assert_eq!(report.clusters, 2);
        assert_eq!(report.longest_cluster, 4);
        assert_eq!(report.ways, BigUint::from(2u32 * 8));

        let report = ClusterCounter::new().analyze(b"7").unwrap();
        assert_eq!(report.clusters, 0);
        assert_eq!(report.longest_cluster, 0);
        assert_eq!(report.ways, BigUint::one());
    }

    #[test]
    fn empty_input() {
        assert_eq!(count(""), Err(DecodeError::EmptyInput));
    }

    #[test]
    fn leading_zero() {
        assert_eq!(count("0"), Err(DecodeError::LeadingZero));
        assert_eq!(count("0123"), Err(DecodeError::LeadingZero));
    }

    #[test]
    fn invalid_start() {
        assert_eq!(
            count("a12"),
            Err(DecodeError::InvalidStartCharacter { found: b'a' })
        );
        assert_eq!(
            count("-1"),
            Err(DecodeError::InvalidStartCharacter { found: b'-' })
        );
    }

    #[test]
    fn non_digit_position() {
        assert_eq!(
            count("12a3"),
            Err(DecodeError::NonDigitCharacter {
                found: b'a',
                position: 1
            })
        );
        assert_eq!(
            count("226\n"),
            Err(DecodeError::NonDigitCharacter {
                found: b'\n',
                position: 2
            })
        );
    }

    #[test]
    fn invalid_zero() {
        assert_eq!(
            count("30"),
            Err(DecodeError::InvalidZeroPlacement {
                preceding: '3',
                position: 0
            })
        );
        assert_eq!(
            count("1100"),
            Err(DecodeError::InvalidZeroPlacement {
                preceding: '0',
                position: 2
            })
        );
    }

    #[test]
    fn first_violation_wins() {
        assert_eq!(
            count("1x0"),
            Err(DecodeError::NonDigitCharacter {
                found: b'x',
                position: 0
            })
        );
        assert_eq!(
            count("1500a"),
            Err(DecodeError::InvalidZeroPlacement {
                preceding: '5',
                position: 1
            })
        );
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let mut counter = ClusterCounter::new();
        let input = b"1121222611".to_vec();
        let first = counter.count(&input).unwrap();
        let second = counter.count(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(input, b"1121222611");
    }

    #[test]
    fn cache_grows_to_longest_cluster() {
        let mut counter = ClusterCounter::new();
        counter.count(&[b'1'; 30]).unwrap();
        // 29 ambiguous pairs -> F(31), table holds F(0)..=F(31)
        assert_eq!(counter.cache().len(), 32);
        counter.count(b"1111").unwrap();
        assert_eq!(counter.cache().len(), 32);
    }

    #[test]
    fn borrowed_and_shared_caches() {
        let mut cache = FibonacciCache::new();
        {
            let mut counter = ClusterCounter::with_cache(&mut cache);
            assert_eq!(counter.count(b"11111").unwrap(), BigUint::from(8u32));
        }
        assert_eq!(cache.len(), 7);

        let shared = SharedFibonacciCache::new();
        let mut counter = ClusterCounter::with_cache(&shared);
        assert_eq!(counter.count(b"226").unwrap(), BigUint::from(3u32));
        assert_eq!(shared.len(), 5);
    }

    #[test]
    fn large_result_exceeds_u64() {
        let input = vec![b'1'; 200];
        let mut cache = FibonacciCache::new();
        let expected = cache.fibonacci(201).clone();
        assert_eq!(ClusterCounter::new().count(&input).unwrap(), expected);
        assert!(expected.bits() > 64);
    }
}
