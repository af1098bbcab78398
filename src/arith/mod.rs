// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact integer building blocks.
//!
//! Every count in this crate is a [`Count`], an arbitrary-precision unsigned
//! integer, because `n!` leaves the range of any fixed-width type at n = 21.
//!
//! # Examples
//!
//! ```
//! use run_count::arith::{factorial, no_run_count, range_product, Count};
//!
//! assert_eq!(range_product(3usize, 5usize), Count::from(60u32));
//! assert_eq!(factorial(4), Count::from(24u32));
//! assert_eq!(no_run_count(4).unwrap(), Count::from(11u32));
//!
//! // Counts also construct from decimal text.
//! let big: Count = "51090942171709440000".parse().unwrap();
//! assert_eq!(factorial(21), big);
//! ```

pub mod no_run;
pub mod product;

pub use no_run::no_run_count;
pub use product::{factorial, range_product};

/// Arbitrary-precision count of permutations.
pub type Count = num_bigint::BigUint;
