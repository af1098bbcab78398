// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shuffle-play probability.
//!
//! A music player shuffling `n` tracks picks one of the `n!` orders
//! uniformly. The chance that some `min_length` tracks of the album still
//! play back to back, in order, is the fraction of permutations with a run of
//! at least that length.

use crate::arith::factorial;
use crate::error::Result;
use crate::queries::at_least_one_run_at_least;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

/// Probability that a uniformly random permutation of `n` elements has a
/// maximal run of length `>= min_length`.
///
/// The ratio is formed exactly and only then rounded to `f64`.
///
/// # Errors
///
/// Same as [`at_least_one_run_at_least`].
pub fn probability_of_run_at_least(n: usize, min_length: usize) -> Result<f64> {
    let favourable = at_least_one_run_at_least(n, min_length)?;
    let ratio = BigRational::new(BigInt::from(favourable), BigInt::from(factorial(n)));
    let probability = ratio.to_f64().unwrap_or(f64::NAN);
    tracing::debug!(n, min_length, probability, "shuffle probability");
    Ok(probability)
}
