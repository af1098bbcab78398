// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Products over inclusive integer ranges.

use super::Count;
use num_traits::One;

/// Product of every integer in `[lo, hi]`.
///
/// Returns 1 for an empty range (`lo > hi`). This covers factorials
/// (`range_product(1, n)`) and falling factorials
/// (`range_product(n - k + 1, n)` = number of ordered ways to pick `k` of `n`).
pub fn range_product(lo: impl Into<Count>, hi: impl Into<Count>) -> Count {
    let hi = hi.into();
    let mut factor = lo.into();
    let mut product = Count::one();
    while factor <= hi {
        product *= &factor;
        factor += 1u32;
    }
    product
}

/// `n!`, with `0! = 1`.
pub fn factorial(n: usize) -> Count {
    range_product(1usize, n)
}
