// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations with an exact number of consecutive sequences of one length.
//!
//! A maximal run of `L` elements contains `L - length + 1` consecutive
//! sequences of `length` elements (none if `L < length`). A profile therefore
//! contributes `sum(count(L) * (L - length + 1))` sequences, and the query
//! keeps the profiles where that sum equals the requested count.
//!
//! A single run longer than `length + count - 1` already overshoots, which
//! gives the enumerator its upper bound.

use crate::arith::Count;
use crate::engine::{sum_over_profiles, SelectionCondition};
use crate::error::{check_run_length, Result};
use crate::profile::ProfileVector;

/// Accepts profiles containing exactly `count` consecutive sequences of
/// `length` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubRunCountSelection {
    length: usize,
    count: usize,
    max_length: usize,
}

impl SubRunCountSelection {
    /// Condition for permutations of `n` elements.
    pub fn new(n: usize, length: usize, count: usize) -> Self {
        let max_length = length.saturating_add(count).saturating_sub(1).min(n);
        Self {
            length,
            count,
            max_length,
        }
    }
}

impl SelectionCondition for SubRunCountSelection {
    fn accept(&self, profile: &ProfileVector) -> bool {
        let mut sequences = 0usize;
        for run_length in self.length..=self.max_length {
            let per_run = run_length - self.length + 1;
            sequences = sequences.saturating_add(profile.count(run_length).saturating_mul(per_run));
            if sequences > self.count {
                return false;
            }
        }
        sequences == self.count
    }

    fn max_length(&self) -> Option<usize> {
        Some(self.max_length)
    }

    fn name(&self) -> &str {
        "SubRunCount"
    }
}

/// Number of permutations of `n` elements with exactly `count` consecutive
/// sequences of `length` elements, maximal or not.
///
/// With `count == 0` this is the number of permutations having no run of
/// `length` or more.
///
/// # Errors
///
/// - [`CountError::InvalidElementCount`](crate::CountError::InvalidElementCount) if `n == 0`
/// - [`CountError::InvalidRunLength`](crate::CountError::InvalidRunLength) unless `2 <= length <= n`
///
/// # Examples
///
/// ```
/// use run_count::queries::exact_count_of_runs_of_length;
/// use run_count::arith::Count;
///
/// // (0,1,2,3) has three consecutive pairs; so does no other permutation of 4.
/// assert_eq!(exact_count_of_runs_of_length(4, 2, 3).unwrap(), Count::from(1u32));
/// ```
pub fn exact_count_of_runs_of_length(n: usize, length: usize, count: usize) -> Result<Count> {
    check_run_length(n, length)?;
    let total = sum_over_profiles(n, &SubRunCountSelection::new(n, length, count))?;
    tracing::debug!(n, length, count, %total, "exact number of consecutive sequences");
    Ok(total)
}
