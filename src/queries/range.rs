// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations whose maximal runs all lie in a length range.

use crate::arith::Count;
use crate::engine::{sum_over_profiles, SelectionCondition};
use crate::error::{check_element_count, CountError, Result};
use crate::profile::ProfileVector;

/// Accepts profiles with at least one run in `[min_length, max_length]`.
///
/// The bounds keep every other length at zero, so "at least one run inside"
/// is all `accept` has to check; the run-free profile is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRangeSelection {
    min_length: usize,
    max_length: usize,
}

impl LengthRangeSelection {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

impl SelectionCondition for LengthRangeSelection {
    fn accept(&self, profile: &ProfileVector) -> bool {
        (self.min_length..=self.max_length).any(|length| profile.count(length) > 0)
    }

    fn min_length(&self) -> Option<usize> {
        Some(self.min_length)
    }

    fn max_length(&self) -> Option<usize> {
        Some(self.max_length)
    }

    fn name(&self) -> &str {
        "LengthRange"
    }
}

/// Number of permutations of `n` elements with at least one maximal run, all
/// of whose maximal runs have length in `[min_length, max_length]`.
///
/// Permutations without any run are not included; see
/// [`no_run_count`](crate::arith::no_run_count) for those.
///
/// # Errors
///
/// - [`CountError::InvalidElementCount`] if `n == 0`
/// - [`CountError::InvalidLengthRange`] unless `2 <= min_length <= max_length <= n`
///
/// # Examples
///
/// ```
/// use run_count::queries::at_least_one_run_in_length_range;
/// use run_count::arith::Count;
///
/// // (0,1,2,3), (2,3,0,1), and the two permutations with one run of 3.
/// assert_eq!(at_least_one_run_in_length_range(4, 3, 4).unwrap(), Count::from(3u32));
/// ```
pub fn at_least_one_run_in_length_range(
    n: usize,
    min_length: usize,
    max_length: usize,
) -> Result<Count> {
    check_element_count(n)?;
    if min_length < 2 || min_length > max_length || max_length > n {
        return Err(CountError::InvalidLengthRange {
            min_length,
            max_length,
            n,
        });
    }
    let total = sum_over_profiles(n, &LengthRangeSelection::new(min_length, max_length))?;
    tracing::debug!(n, min_length, max_length, %total, "runs only in length range");
    Ok(total)
}
