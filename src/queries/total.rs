// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Total number of permutations.

use crate::arith::{factorial, Count};
use crate::error::{check_element_count, Result};

/// `n!`, the size of the whole space. Handy for complement counts.
pub fn number_of_permutations(n: usize) -> Result<Count> {
    check_element_count(n)?;
    Ok(factorial(n))
}
