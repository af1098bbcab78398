// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Distribution of permutations by number of adjacent consecutive pairs.
//!
//! An adjacent consecutive pair is an occurrence of `i, i + 1` side by side,
//! whether or not it belongs to a longer run: `(3, 4, 1, 2)` and
//! `(4, 1, 2, 3)` both have two.
//!
//! # Recurrence
//!
//! Every permutation of `m` elements comes from exactly one permutation of
//! `m - 1` elements, by inserting the largest element `m - 1` and, if that
//! splits an existing pair, by the unique repair that removes the split. With
//! `P(m, i)` the number of permutations of `m` elements with `i - 1` pairs:
//!
//! ```text
//! P(m, i) = P(m-1, i-1) + (m - i) * P(m-1, i) + i * P(m-1, i+1)
//! ```
//!
//! The rows carry one zero before slot 1 and two after slot `m`, so the
//! recurrence reads the neighbours of every slot without bounds checks.
//! This only works for pairs: longer sequences have no such recurrence.

use crate::arith::Count;
use crate::error::{check_element_count, Result};
use num_traits::{One, Zero};

/// Row for one element: `[0, 1, 0, 0]`.
fn initial_row() -> Vec<Count> {
    vec![Count::zero(), Count::one(), Count::zero(), Count::zero()]
}

/// Row for `m` elements from the row for `m - 1`.
fn next_row(previous: &[Count], m: usize) -> Vec<Count> {
    debug_assert_eq!(previous.len(), m + 2);
    let mut row = Vec::with_capacity(m + 3);
    row.push(Count::zero());
    for i in 1..=m {
        let value = &previous[i - 1] + &previous[i] * (m - i) + &previous[i + 1] * i;
        row.push(value);
    }
    row.push(Count::zero());
    row.push(Count::zero());
    row
}

/// Number of permutations of `n` elements with each possible number of
/// adjacent consecutive pairs.
///
/// Entry `k` of the result (for `k` in `0..n`) counts the permutations with
/// exactly `k` pairs. The entries sum to `n!` and entry `n - 1` is always 1.
///
/// # Errors
///
/// [`CountError::InvalidElementCount`](crate::CountError::InvalidElementCount) if `n == 0`.
///
/// # Examples
///
/// ```
/// use run_count::queries::by_adjacent_pair_count;
/// use run_count::arith::Count;
///
/// let counts = by_adjacent_pair_count(4).unwrap();
/// assert_eq!(counts, [11u32, 9, 3, 1].map(Count::from).to_vec());
/// ```
pub fn by_adjacent_pair_count(n: usize) -> Result<Vec<Count>> {
    check_element_count(n)?;
    let mut row = initial_row();
    for m in 2..=n {
        row = next_row(&row, m);
    }
    tracing::debug!(n, "adjacent pair distribution computed");
    Ok(row.into_iter().skip(1).take(n).collect())
}
