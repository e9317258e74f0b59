// Copyright 2025 Cowboy AI, LLC.

//! # CIM Memo
//!
//! Memoizing function adapters and composition combinators.
//!
//! This crate provides the building blocks for caching pure single-argument
//! computations:
//! - **Memo**: adapter wrapping a function `A -> B`, invoking it at most
//!   once per distinct argument value
//! - **FallibleMemo**: the same contract for `A -> Result<B, E>`, caching
//!   successes only; failures propagate unchanged and are retried
//! - **memoize**: closure form of the adapter for call-site ergonomics
//! - **Composition combinators**: `identity`, `compose`, `constant`
//! - **CacheStats / FallibleStats**: per-adapter hit/miss counters
//!
//! ## Design Principles
//!
//! 1. **Compile-time constraints**: argument types must be `Eq + Hash`;
//!    unsupported key types are rejected by the type system, never at runtime
//! 2. **Exclusive ownership**: each adapter owns its cache; invocation takes
//!    `&mut self`, so unsynchronized cross-thread sharing is a compile error
//! 3. **Transparent failures**: errors and panics from the wrapped function
//!    propagate unchanged and are never cached
//! 4. **Monotonic caches**: no eviction and no capacity bound; memory grows
//!    with the number of distinct arguments seen
//! 5. **Observability without extra bounds**: counters and `tracing` events
//!    never require `Debug` on keys or values

#![warn(missing_docs)]

mod compose;
mod fallible;
mod memo;

pub use compose::{compose, constant, identity};
pub use fallible::{FallibleMemo, FallibleStats};
pub use memo::{memoize, CacheStats, Memo};
