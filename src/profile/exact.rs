// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting the permutations that match one profile exactly.
//!
//! # Gap insertion
//!
//! Collapse every requested run of length `L` into a single element. What
//! remains is a permutation of
//!
//! ```text
//! base = n - (combined_length - total_runs)
//! ```
//!
//! elements that must have no consecutive pair of its own, otherwise the
//! expanded runs would not be maximal. There are `no_run_count(base)` such
//! base permutations. Choosing which `total_runs` of the `base` elements get
//! expanded, and to which length, can be done in
//!
//! ```text
//! base! / (base - total_runs)! / prod_L count_L!
//! ```
//!
//! ways: an ordered pick of `total_runs` slots, divided by the reorderings of
//! runs that share a length. Every permutation with the requested profile is
//! produced exactly once, so the count is the product of the two factors.
//! The division is always exact.

use crate::arith::{factorial, no_run::no_run_count_unchecked, range_product, Count};
use crate::error::{check_element_count, CountError, Result};
use crate::memo::CountingMemo;
use crate::profile::{McsProfile, ProfileVector};
use num_traits::Zero;

/// Totals of a profile that the closed form needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ProfileShape {
    combined_length: usize,
    total_runs: usize,
}

impl ProfileShape {
    /// `None` if the totals overflow, which also means the profile cannot fit.
    fn of(pairs: impl Iterator<Item = (usize, usize)>) -> Option<Self> {
        let mut shape = ProfileShape {
            combined_length: 0,
            total_runs: 0,
        };
        for (length, count) in pairs {
            shape.combined_length = shape
                .combined_length
                .checked_add(length.checked_mul(count)?)?;
            shape.total_runs = shape.total_runs.checked_add(count)?;
        }
        Some(shape)
    }

    /// Elements left after collapsing each run to a single element.
    fn base_count(&self, n: usize) -> usize {
        n - (self.combined_length - self.total_runs)
    }
}

/// Number of permutations of `n` elements whose maximal runs have exactly the
/// lengths and multiplicities in `profile`.
///
/// Returns zero if the runs do not fit (`combined_length > n`). The empty
/// profile yields [`no_run_count(n)`](crate::arith::no_run_count).
///
/// # Errors
///
/// - [`CountError::InvalidElementCount`] if `n == 0`
/// - [`CountError::InvalidRunLength`] if a length with nonzero count is
///   outside `[2, n]`
///
/// # Examples
///
/// ```
/// use run_count::profile::{exact_profile_count, McsProfile};
/// use run_count::arith::Count;
///
/// // (2,0,1) and (1,2,0): one maximal run of length 2 among 3 elements.
/// let profile = McsProfile::new().with(2, 1);
/// assert_eq!(exact_profile_count(3, &profile).unwrap(), Count::from(2u32));
///
/// // Two runs of length 3 need 6 elements.
/// let profile = McsProfile::new().with(3, 2);
/// assert_eq!(exact_profile_count(5, &profile).unwrap(), Count::from(0u32));
/// ```
pub fn exact_profile_count(n: usize, profile: &McsProfile) -> Result<Count> {
    check_element_count(n)?;
    if let Some((length, _)) = profile
        .iter()
        .find(|&(length, _)| length < 2 || length > n)
    {
        return Err(CountError::InvalidRunLength { length, n });
    }

    let shape = match ProfileShape::of(profile.iter()) {
        Some(shape) if shape.combined_length <= n => shape,
        _ => return Ok(Count::zero()),
    };

    let base = shape.base_count(n);
    let arrangements = range_product(base - shape.total_runs + 1, base);
    let mut same_length_orders = Count::from(1u32);
    for (_, count) in profile.iter() {
        same_length_orders *= factorial(count);
    }
    debug_assert!(
        (&arrangements % &same_length_orders).is_zero(),
        "inexact division for profile {} with n = {}",
        profile,
        n
    );

    Ok(no_run_count_unchecked(base) * (arrangements / same_length_orders))
}

/// Table-driven variant used at the leaves of the enumerator.
///
/// The vector must be realizable for `memo.num_elements()`, which the
/// enumerator's budget guarantees.
pub(crate) fn exact_count_with_memo(memo: &CountingMemo, vector: &ProfileVector) -> Count {
    let n = memo.num_elements();
    let Some(shape) = ProfileShape::of(vector.iter_nonzero())
        .filter(|shape| shape.combined_length <= n)
    else {
        debug_assert!(false, "enumerated profile exceeds its element budget");
        return Count::zero();
    };

    let base = shape.base_count(n);
    let mut divisor = memo.factorial(base - shape.total_runs).clone();
    for (_, count) in vector.iter_nonzero() {
        divisor *= memo.factorial(count);
    }
    let arrangements = memo.factorial(base) / divisor;
    memo.no_run(base) * arrangements
}
