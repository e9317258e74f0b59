// Copyright 2025 Cowboy AI, LLC.

//! Memoizing adapter for single-argument functions.
//!
//! [`Memo`] wraps a function `A -> B` and answers repeated calls with an
//! equal argument from an internal cache, invoking the wrapped function at
//! most once per distinct argument value. The cache grows monotonically for
//! the adapter's lifetime; there is no eviction and no capacity bound.
//!
//! The adapter assumes the wrapped function is pure. Wrapping an impure
//! function is permitted and is the classic way to observe what memoization
//! does: the cached behavior diverges from repeated direct calls, because
//! the side effect runs only on the first call per argument.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::trace;

/// Hit/miss counters for one adapter instance.
///
/// `misses` equals the number of invocations of the wrapped function that
/// ran to completion and populated the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls answered from the cache without invoking the wrapped function.
    pub hits: u64,
    /// Calls that invoked the wrapped function and cached its result.
    pub misses: u64,
}

impl CacheStats {
    /// Total calls observed by the adapter.
    pub fn calls(&self) -> u64 {
        self.hits + self.misses
    }
}

/// A memoizing adapter around a function `A -> B`.
///
/// Construction performs no invocation of the wrapped function; the cache
/// starts empty and is populated lazily on first use of each distinct
/// argument. Repeated calls with an equal argument return the result of the
/// first invocation, even if the wrapped function is not actually pure.
/// That is a documented limitation, not a correctness guarantee.
///
/// Argument types must be `Clone + Eq + Hash`; anything else is rejected at
/// compile time. Invocation takes `&mut self`, so sharing one adapter
/// across threads without external synchronization is a compile error
/// rather than a data race.
///
/// # Example
///
/// ```
/// use cim_memo::Memo;
///
/// let mut adder = Memo::new(|x: i32| x + 5);
/// assert_eq!(adder.call(10), 15);
/// assert_eq!(adder.call(10), 15); // served from the cache
/// assert_eq!(adder.stats().misses, 1);
/// ```
pub struct Memo<A, B, F> {
    f: F,
    cache: HashMap<A, B>,
    stats: CacheStats,
}

impl<A, B, F> Memo<A, B, F>
where
    A: Clone + Eq + Hash,
    B: Clone,
    F: Fn(A) -> B,
{
    /// Wrap a function in a memoizing adapter with an empty cache.
    pub fn new(f: F) -> Self {
        Self {
            f,
            cache: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Invoke the adapter.
    ///
    /// Returns the cached result for any argument equal to one seen before;
    /// otherwise invokes the wrapped function, caches its result under
    /// `arg`, and returns it. A panic in the wrapped function propagates
    /// and caches nothing: the insert happens only after it returns.
    pub fn call(&mut self, arg: A) -> B {
        if let Some(result) = self.cache.get(&arg) {
            self.stats.hits += 1;
            trace!(entries = self.cache.len(), "memo hit");
            return result.clone();
        }
        let result = (self.f)(arg.clone());
        self.cache.insert(arg, result.clone());
        self.stats.misses += 1;
        trace!(entries = self.cache.len(), "memo miss, result cached");
        result
    }

    /// Borrow the cached result for `arg`, if present.
    ///
    /// Never invokes the wrapped function and does not touch the counters.
    pub fn peek(&self, arg: &A) -> Option<&B> {
        self.cache.get(arg)
    }

    /// Whether a result is cached for `arg`.
    pub fn contains(&self, arg: &A) -> bool {
        self.cache.contains_key(arg)
    }

    /// Number of distinct arguments cached so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is still empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Hit/miss counters for this adapter.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl<A, B, F> fmt::Debug for Memo<A, B, F> {
    // Keys, values, and the wrapped function are deliberately not printed;
    // none of them is required to be Debug.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("entries", &self.cache.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// Wrap a function in a memoizing closure.
///
/// The closure owns its cache and behaves like [`Memo::call`]; this is the
/// form to reach for when the call site wants function-call syntax rather
/// than a method.
///
/// # Example
///
/// ```
/// use cim_memo::memoize;
///
/// let mut adder = memoize(|x: i32| x + 5);
/// assert_eq!(adder(10), 15);
/// assert_eq!(adder(10), 15);
/// ```
pub fn memoize<A, B, F>(f: F) -> impl FnMut(A) -> B
where
    A: Clone + Eq + Hash,
    B: Clone,
    F: Fn(A) -> B,
{
    let mut memo = Memo::new(f);
    move |arg| memo.call(arg)
}
