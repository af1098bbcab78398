// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations with at least one long run.
//!
//! Counted as `n!` minus the permutations whose runs are all shorter than the
//! threshold. The complement has an upper length bound, so the enumerator
//! only walks lengths below the threshold.

use crate::arith::{factorial, Count};
use crate::engine::{sum_over_profiles, Selection};
use crate::error::{check_run_length, Result};
use crate::profile::ProfileVector;

/// Number of permutations of `n` elements with at least one maximal run of
/// length `>= min_length`.
///
/// # Errors
///
/// - [`CountError::InvalidElementCount`](crate::CountError::InvalidElementCount) if `n == 0`
/// - [`CountError::InvalidRunLength`](crate::CountError::InvalidRunLength) unless `2 <= min_length <= n`
///
/// # Examples
///
/// ```
/// use run_count::queries::at_least_one_run_at_least;
/// use run_count::arith::Count;
///
/// // Of the 24 permutations of 4 elements, 11 have no run at all.
/// assert_eq!(at_least_one_run_at_least(4, 2).unwrap(), Count::from(13u32));
/// ```
pub fn at_least_one_run_at_least(n: usize, min_length: usize) -> Result<Count> {
    check_run_length(n, min_length)?;

    // Only runs shorter than `min_length`, or no runs at all.
    let all_short = Selection::new(|_: &ProfileVector| true)
        .with_max_length(min_length - 1);
    let short = sum_over_profiles(n, &all_short)?;
    let total = factorial(n) - short;
    tracing::debug!(n, min_length, %total, "at least one long run");
    Ok(total)
}

/// Number of permutations of `n` elements containing at least one
/// consecutive sequence of exactly `length` elements, maximal or not.
///
/// A sequence of `length` lies inside every run at least that long, so this
/// equals [`at_least_one_run_at_least`].
pub fn at_least_one_run_of_length(n: usize, length: usize) -> Result<Count> {
    at_least_one_run_at_least(n, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::no_run_count;
    use crate::queries::at_least_one_run_in_length_range;
    use crate::CountError;

    #[test]
    fn test_threshold_two_is_complement_of_no_runs() {
        for n in 2..=14 {
            let expected = factorial(n) - no_run_count(n).unwrap();
            assert_eq!(at_least_one_run_at_least(n, 2).unwrap(), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_threshold_n_is_identity_only() {
        for n in 2..=10 {
            assert_eq!(at_least_one_run_at_least(n, n).unwrap(), Count::from(1u32));
        }
    }

    #[test]
    fn test_agrees_with_range_to_n() {
        // Every run is at least 2 long.
        let n = 9;
        assert_eq!(
            at_least_one_run_at_least(n, 2).unwrap(),
            at_least_one_run_in_length_range(n, 2, n).unwrap()
        );
    }

    #[test]
    fn test_small_values() {
        // n = 4: {3:1} (2 perms) + {4:1} (1 perm).
        assert_eq!(at_least_one_run_at_least(4, 3).unwrap(), Count::from(3u32));
        assert_eq!(at_least_one_run_of_length(4, 3).unwrap(), Count::from(3u32));
    }

    #[test]
    fn test_invalid_threshold() {
        assert_eq!(
            at_least_one_run_at_least(5, 1),
            Err(CountError::InvalidRunLength { length: 1, n: 5 })
        );
        assert_eq!(
            at_least_one_run_of_length(5, 6),
            Err(CountError::InvalidRunLength { length: 6, n: 5 })
        );
        assert_eq!(
            at_least_one_run_at_least(0, 2),
            Err(CountError::InvalidElementCount { n: 0 })
        );
    }
}
