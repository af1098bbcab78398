// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! The enumerator evaluates the closed form once per leaf, and every leaf
//! needs `no_run_count(base)` and a handful of factorials for some `base <= n`.
//! Recomputing them per leaf would cost O(n) bignum multiplications each time,
//! so one [`CountingMemo`] is built per enumeration and shared read-only by all
//! of its leaves.
//!
//! # Memory
//!
//! Two tables of `n + 1` bignums each. Entry `k` has O(k log k) bits, so the
//! whole memo is O(n² log n) bits: a few kilobytes for the `n` where full
//! enumeration is tractable at all.

use crate::arith::Count;
use num_traits::One;

/// Factorials and no-run counts for every size `0..=n`.
#[derive(Debug, Clone)]
pub struct CountingMemo {
    /// `factorials[k] = k!`
    factorials: Vec<Count>,

    /// `no_run[k]` = permutations of `k` elements with no consecutive pair.
    /// Entry 0 is the empty permutation, which trivially has none.
    no_run: Vec<Count>,
}

impl CountingMemo {
    /// Build both tables bottom-up, each in `n` multiplications.
    pub fn new(n: usize) -> Self {
        let mut factorials = Vec::with_capacity(n + 1);
        factorials.push(Count::one());
        for k in 1..=n {
            let next = &factorials[k - 1] * k;
            factorials.push(next);
        }

        let mut no_run = Vec::with_capacity(n + 1);
        for k in 0..=n {
            let value = if k < 3 {
                Count::one()
            } else {
                &no_run[k - 1] * (k - 1) + &no_run[k - 2] * (k - 2)
            };
            no_run.push(value);
        }

        tracing::trace!(n, "counting memo initialized");
        Self { factorials, no_run }
    }

    /// Largest size covered by the tables.
    pub fn num_elements(&self) -> usize {
        self.factorials.len() - 1
    }

    /// `k!` for `k <= n`.
    ///
    /// # Panics
    ///
    /// Panics if `k > n`.
    pub fn factorial(&self, k: usize) -> &Count {
        &self.factorials[k]
    }

    /// Permutations of `k` elements without consecutive pairs, `k <= n`.
    ///
    /// # Panics
    ///
    /// Panics if `k > n`.
    pub fn no_run(&self, k: usize) -> &Count {
        &self.no_run[k]
    }
}
