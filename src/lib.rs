// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact counts of permutations by their maximal consecutive runs.
//!
//! A consecutive sequence in a permutation of `{0, .., n-1}` is an occurrence
//! of `i, i+1, .., i+k-1` side by side, with `k >= 2`. A maximal run is one
//! that is not part of a longer consecutive sequence. The profile of a
//! permutation records how many maximal runs it has of each length.
//!
//! All counts are exact arbitrary-precision integers ([`Count`]).
//!
//! # Architecture
//!
//! The implementation follows a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Tables computed once per `n` before any enumeration:
//! - Factorials `0! ..= n!`
//! - Counts of run-free permutations of `0 ..= n` elements
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! State that changes during an enumeration, tracked on the trail:
//! - The in-flight profile vector
//! - Trail - records profile writes for O(1) backtracking
//! - Statistics counters
//!
//! # Counting
//!
//! 1. [`no_run_count`]: permutations with no consecutive pair at all
//! 2. [`exact_profile_count`]: permutations with exactly one given profile,
//!    in closed form
//! 3. [`sum_over_profiles`]: the closed form summed over every profile a
//!    [`SelectionCondition`] accepts, by depth-first enumeration with
//!    trail-based backtracking
//! 4. [`queries`]: named questions answered through the enumerator, plus a
//!    separate recurrence for adjacent pairs
//!
//! # Example
//!
//! ```
//! use run_count::{exact_profile_count, McsProfile, Count};
//!
//! // Permutations of 6 elements with one run of 3 and nothing else.
//! let profile: McsProfile = "3:1".parse().unwrap();
//! let count = exact_profile_count(6, &profile).unwrap();
//! // Glue the run into one element: 11 run-free orders of 4, times 4 places.
//! assert_eq!(count, Count::from(44u32));
//! ```

pub mod arith;
pub mod context;
pub mod engine;
pub mod error;
pub mod memo;
pub mod profile;
pub mod queries;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use arith::{factorial, no_run_count, range_product, Count};
pub use context::EnumerationContext;
pub use engine::{sum_over_profiles, AcceptAll, ProfileEnumerator, Selection, SelectionCondition};
pub use error::{CountError, Result};
pub use profile::{exact_profile_count, McsProfile, ProfileVector};
pub use queries::{
    at_least_one_run_at_least, at_least_one_run_in_length_range, at_least_one_run_of_length,
    by_adjacent_pair_count, exact_count_of_runs_of_length, number_of_permutations,
    probability_of_run_at_least,
};
pub use trail::Trail;
