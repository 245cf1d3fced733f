//! Append-only table of big Fibonacci numbers, extended on demand.
//!
//! `FibonacciCache` is owned by a single counter and needs `&mut self`.
//! `SharedFibonacciCache` wraps the same table in a mutex so one cache can
//! serve counting calls running on several threads.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use parking_lot::Mutex;

/// Anything that can multiply an accumulator by F(index).
///
/// The cluster counter is generic over this so it can run against an owned
/// cache or a shared one.
pub trait FibonacciSource {
    /// Multiply `acc` in place by F(`index`).
    fn multiply_by(&mut self, acc: &mut BigUint, index: usize);
}

/// Memoized Fibonacci table with F(0) = 0 and F(1) = 1.
///
/// Entries are never removed or recomputed; asking for an index beyond the
/// frontier extends the table up to and including that index.
///
/// # Example
/// ```
/// use decodeways_core::fib_cache::FibonacciCache;
/// let mut cache = FibonacciCache::new();
/// assert_eq!(cache.fibonacci(10).to_string(), "55");
/// ```
#[derive(Debug, Clone)]
pub struct FibonacciCache {
    table: Vec<BigUint>,
}

impl FibonacciCache {
    /// Create a cache holding only the base values `[0, 1]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: vec![BigUint::zero(), BigUint::one()],
        }
    }

    /// Return F(n), extending the table if `n` is past the frontier.
    pub fn fibonacci(&mut self, n: usize) -> &BigUint {
        self.extend_to(n);
        &self.table[n]
    }

    /// Number of stored entries (frontier index + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always `false`: the base values are present from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn extend_to(&mut self, n: usize) {
        if n < self.table.len() {
            return;
        }
        self.table.reserve(n + 1 - self.table.len());
        for i in self.table.len()..=n {
            let next = &self.table[i - 1] + &self.table[i - 2];
            self.table.push(next);
        }
    }
}

impl Default for FibonacciCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciSource for FibonacciCache {
    fn multiply_by(&mut self, acc: &mut BigUint, index: usize) {
        *acc *= self.fibonacci(index);
    }
}

impl FibonacciSource for &mut FibonacciCache {
    fn multiply_by(&mut self, acc: &mut BigUint, index: usize) {
        *acc *= self.fibonacci(index);
    }
}

/// Thread-safe Fibonacci table backed by a `Mutex<FibonacciCache>`.
///
/// The lock covers read-extend-clone; the multiplication itself happens
/// outside the lock.
#[derive(Debug, Default)]
pub struct SharedFibonacciCache {
    inner: Mutex<FibonacciCache>,
}

impl SharedFibonacciCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FibonacciCache::new()),
        }
    }

    /// Return a copy of F(n), extending the shared table if needed.
    pub fn fibonacci(&self, n: usize) -> BigUint {
        self.inner.lock().fibonacci(n).clone()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl FibonacciSource for &SharedFibonacciCache {
    fn multiply_by(&mut self, acc: &mut BigUint, index: usize) {
        let factor = self.fibonacci(index);
        *acc *= factor;
    }
}
