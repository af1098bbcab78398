// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the counting operations.
//!
//! Every variant is an invalid-argument condition detected at a public entry
//! point. A profile whose runs do not fit in the permutation is not an error:
//! it simply has count zero.

use thiserror::Error;

/// Errors returned by the public counting operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    /// The number of permuted elements must be at least 1.
    #[error("element count must be at least 1, got {n}")]
    InvalidElementCount { n: usize },

    /// A run length must lie in `[2, n]`.
    #[error("run length {length} is outside [2, {n}]")]
    InvalidRunLength { length: usize, n: usize },

    /// A length range must satisfy `2 <= min_length <= max_length <= n`.
    #[error("length range [{min_length}, {max_length}] is not within [2, {n}]")]
    InvalidLengthRange {
        min_length: usize,
        max_length: usize,
        n: usize,
    },

    /// Textual profile could not be parsed.
    #[error("cannot parse profile {text:?}: {reason}")]
    InvalidProfile { text: String, reason: String },
}

impl CountError {
    /// All variants describe arguments outside the documented domain.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}

pub type Result<T> = std::result::Result<T, CountError>;

/// Fail fast unless `n >= 1`.
pub(crate) fn check_element_count(n: usize) -> Result<()> {
    if n == 0 {
        return Err(CountError::InvalidElementCount { n });
    }
    Ok(())
}

/// Fail fast unless `n >= 1` and `2 <= length <= n`.
pub(crate) fn check_run_length(n: usize, length: usize) -> Result<()> {
    check_element_count(n)?;
    if length < 2 || length > n {
        return Err(CountError::InvalidRunLength { length, n });
    }
    Ok(())
}
