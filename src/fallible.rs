// Copyright 2025 Cowboy AI, LLC.

//! Memoizing adapter for fallible functions.
//!
//! [`FallibleMemo`] applies the contract of [`crate::Memo`] to wrapped
//! functions returning `Result`. Only successful results are cached. An
//! error propagates to the caller unchanged (the adapter neither catches
//! nor wraps the error value) and leaves the cache untouched, so a later
//! call with the same argument invokes the wrapped function again.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::trace;

/// Hit/miss/error counters for one fallible adapter instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FallibleStats {
    /// Calls answered from the cache without invoking the wrapped function.
    pub hits: u64,
    /// Calls that invoked the wrapped function successfully and cached the
    /// result.
    pub misses: u64,
    /// Calls whose invocation returned an error; nothing was cached.
    pub errors: u64,
}

impl FallibleStats {
    /// Total calls observed by the adapter.
    pub fn calls(&self) -> u64 {
        self.hits + self.misses + self.errors
    }
}

/// A memoizing adapter around a function `A -> Result<B, E>`.
///
/// Successes are cached exactly like [`crate::Memo`] results. Failures are
/// never cached: a failing argument is retried in full on the next call,
/// and the error value reaches the caller exactly as the wrapped function
/// produced it. No trait bound is placed on `E`.
///
/// # Example
///
/// ```
/// use cim_memo::FallibleMemo;
///
/// let mut parse = FallibleMemo::new(|s: &str| s.parse::<i32>());
/// assert_eq!(parse.call("42"), Ok(42));
/// assert!(parse.call("not a number").is_err());
/// assert_eq!(parse.len(), 1); // only the success was cached
/// ```
pub struct FallibleMemo<A, B, E, F> {
    f: F,
    cache: HashMap<A, B>,
    stats: FallibleStats,
    _error: PhantomData<fn() -> E>,
}

impl<A, B, E, F> FallibleMemo<A, B, E, F>
where
    A: Clone + Eq + Hash,
    B: Clone,
    F: Fn(A) -> Result<B, E>,
{
    /// Wrap a fallible function in a memoizing adapter with an empty cache.
    pub fn new(f: F) -> Self {
        Self {
            f,
            cache: HashMap::new(),
            stats: FallibleStats::default(),
            _error: PhantomData,
        }
    }

    /// Invoke the adapter.
    ///
    /// Returns `Ok` with the cached result for any argument equal to one
    /// that previously succeeded. Otherwise invokes the wrapped function:
    /// a success is cached under `arg` and returned; an error is returned
    /// unchanged and the cache is not modified.
    pub fn call(&mut self, arg: A) -> Result<B, E> {
        if let Some(result) = self.cache.get(&arg) {
            self.stats.hits += 1;
            trace!(entries = self.cache.len(), "memo hit");
            return Ok(result.clone());
        }
        match (self.f)(arg.clone()) {
            Ok(result) => {
                self.cache.insert(arg, result.clone());
                self.stats.misses += 1;
                trace!(entries = self.cache.len(), "memo miss, result cached");
                Ok(result)
            }
            Err(err) => {
                self.stats.errors += 1;
                trace!(
                    entries = self.cache.len(),
                    "wrapped function failed, nothing cached"
                );
                Err(err)
            }
        }
    }

    /// Borrow the cached result for `arg`, if a success is cached.
    pub fn peek(&self, arg: &A) -> Option<&B> {
        self.cache.get(arg)
    }

    /// Whether a successful result is cached for `arg`.
    pub fn contains(&self, arg: &A) -> bool {
        self.cache.contains_key(arg)
    }

    /// Number of distinct arguments with cached successes.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is still empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Hit/miss/error counters for this adapter.
    pub fn stats(&self) -> FallibleStats {
        self.stats
    }
}

impl<A, B, E, F> fmt::Debug for FallibleMemo<A, B, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallibleMemo")
            .field("entries", &self.cache.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
