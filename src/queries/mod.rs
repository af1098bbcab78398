// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Named queries built on the profile enumerator.
//!
//! Most queries are nothing but a selection condition with the tightest sound
//! bounds, handed to [`sum_over_profiles`](crate::engine::sum_over_profiles).
//! Two do not enumerate profiles at all:
//!
//! - `at_least_*` counts the complement (permutations whose runs are all
//!   short), because "some run is long" cannot be bounded from above while
//!   "every run is short" can.
//! - [`by_adjacent_pair_count`] has its own recurrence.
//!
//! # Organization
//!
//! - `total`: `n!`
//! - `range`: runs only within a length range
//! - `at_least`: at least one run of a minimum length
//! - `exact_count`: an exact number of consecutive sequences of one length
//! - `pairs`: distribution by number of adjacent consecutive pairs
//! - `probability`: the shuffle-play probability derived from `at_least`

pub mod at_least;
pub mod exact_count;
pub mod pairs;
pub mod probability;
pub mod range;
pub mod total;

pub use at_least::{at_least_one_run_at_least, at_least_one_run_of_length};
pub use exact_count::{exact_count_of_runs_of_length, SubRunCountSelection};
pub use pairs::by_adjacent_pair_count;
pub use probability::probability_of_run_at_least;
pub use range::{at_least_one_run_in_length_range, LengthRangeSelection};
pub use total::number_of_permutations;
