// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration context combining MEMO and DYNAMIC state.
//!
//! The context bundles:
//! - Tier 1 (MEMO): the immutable [`CountingMemo`] tables for this `n`
//! - Tier 2 (DYNAMIC): the in-flight dense profile and its trail
//!
//! A context lives for exactly one top-level enumeration. It is created at
//! call entry, mutated only while the traversal descends and backtracks, and
//! dropped when the call returns, so no state leaks between calls.

use crate::memo::CountingMemo;
use crate::profile::ProfileVector;
use crate::state::statistics::Statistics;
use crate::trail::Trail;

/// Enumeration context.
///
/// # Memory Model
///
/// ```text
/// EnumerationContext {
///     memo: CountingMemo,       // Tier 1: immutable
///     trail: Trail,             // Tier 2: mutable, owned
///     profile: ProfileVector,   // Tier 2: mutable, owned
///     statistics: Statistics,
/// }
/// ```
#[derive(Debug)]
pub struct EnumerationContext {
    /// Immutable precomputed tables (Tier 1)
    pub memo: CountingMemo,
    /// Undo log for `profile` (Tier 2)
    pub trail: Trail,
    /// Profile under construction (Tier 2)
    profile: ProfileVector,
    /// Traversal counters
    pub statistics: Statistics,
}

impl EnumerationContext {
    /// Fresh context for permutations of `n` elements.
    pub fn new(n: usize) -> Self {
        Self {
            memo: CountingMemo::new(n),
            trail: Trail::with_capacity(n + 1),
            profile: ProfileVector::zeros(n),
            statistics: Statistics::new(),
        }
    }

    /// Number of permuted elements.
    pub fn num_elements(&self) -> usize {
        self.profile.num_elements()
    }

    /// The profile as built so far.
    pub fn profile(&self) -> &ProfileVector {
        &self.profile
    }

    /// Set the count for `length` (trail-tracked).
    ///
    /// # Panics
    ///
    /// Panics if `length > n`.
    pub fn set_count(&mut self, length: usize, count: usize) {
        assert!(
            length <= self.num_elements(),
            "Run length out of bounds: {}",
            length
        );
        self.trail.record_and_set(&mut self.profile, length, count);
    }

    /// Current trail position.
    pub fn checkpoint(&self) -> usize {
        self.trail.checkpoint()
    }

    /// Restore the profile to its state at `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(&mut self.profile, checkpoint);
    }
}
