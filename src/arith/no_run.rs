// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations with no consecutive run at all.
//!
//! With `a(1) = a(2) = 1`, the count satisfies
//! `a(n) = (n - 1) * a(n - 1) + (n - 2) * a(n - 2)` for `n >= 3`.
//! A top-down evaluation of this recurrence is exponential in `n`; we walk
//! it bottom-up keeping only the last two values.

use super::Count;
use crate::error::{check_element_count, Result};
use num_traits::One;

/// Number of permutations of `n` elements without any consecutive pair
/// `(i, i + 1)`.
///
/// # Errors
///
/// [`CountError::InvalidElementCount`](crate::CountError::InvalidElementCount)
/// if `n == 0`.
pub fn no_run_count(n: usize) -> Result<Count> {
    check_element_count(n)?;
    Ok(no_run_count_unchecked(n))
}

/// Same as [`no_run_count`] for callers that validated `n >= 1`.
pub(crate) fn no_run_count_unchecked(n: usize) -> Count {
    debug_assert!(n >= 1);
    let mut previous = Count::one(); // a(i - 2)
    let mut current = Count::one(); // a(i - 1)
    for i in 3..=n {
        let next = &current * (i - 1) + &previous * (i - 2);
        previous = std::mem::replace(&mut current, next);
    }
    current
}
