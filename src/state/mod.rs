// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC bookkeeping for the enumerator.
//!
//! The in-flight profile itself lives in
//! [`EnumerationContext`](crate::context::EnumerationContext); this module
//! holds the counters describing how much of the tree a traversal explored.

pub mod statistics;

pub use statistics::{Counters, Statistics};
