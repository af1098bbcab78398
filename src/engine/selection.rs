// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selection conditions for the profile enumerator.
//!
//! The enumerator presents every complete profile to a selection condition,
//! which decides whether the permutations matching that profile are counted.
//! A condition may also declare length bounds: the enumerator then only
//! varies counts for lengths within `[min_length, max_length]` and leaves the
//! others at zero.
//!
//! # Soundness of bounds
//!
//! Bounds prune the search, they are not checked. A condition whose `accept`
//! would return true for some profile with a nonzero count outside its own
//! bounds never sees that profile, and the total silently comes out too
//! small. Keeping the two consistent is the caller's job.
//!
//! # Example
//!
//! ```
//! use run_count::engine::{sum_over_profiles, Selection};
//! use run_count::arith::Count;
//!
//! // Permutations of 5 elements whose only runs are pairs (at least one).
//! let pairs_only = Selection::new(|profile| profile.count(2) > 0).with_max_length(2);
//! let total = sum_over_profiles(5, &pairs_only).unwrap();
//! assert_eq!(total, Count::from(53u32));
//! ```

use crate::profile::ProfileVector;
use std::fmt;

/// Decides which complete profiles contribute to an enumeration.
pub trait SelectionCondition {
    /// Whether permutations with exactly this profile are counted.
    ///
    /// Entries at lengths 0 and 1 are always zero, as are entries outside
    /// the declared bounds.
    fn accept(&self, profile: &ProfileVector) -> bool;

    /// No run shorter than this is ever accepted. Defaults to 2.
    fn min_length(&self) -> Option<usize> {
        None
    }

    /// No run longer than this is ever accepted. Defaults to `n`.
    fn max_length(&self) -> Option<usize> {
        None
    }

    /// Optional: a name for this condition (for logging).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Accepts every profile, without bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl SelectionCondition for AcceptAll {
    fn accept(&self, _profile: &ProfileVector) -> bool {
        true
    }

    fn name(&self) -> &str {
        "AcceptAll"
    }
}

/// A selection condition built from a closure and optional bounds.
pub struct Selection<F> {
    accept: F,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl<F> Selection<F>
where
    F: Fn(&ProfileVector) -> bool,
{
    /// Unbounded condition accepting the profiles for which `accept` holds.
    pub fn new(accept: F) -> Self {
        Self {
            accept,
            min_length: None,
            max_length: None,
        }
    }

    /// Only vary counts for lengths `>= min_length`.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Only vary counts for lengths `<= max_length`.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

impl<F> SelectionCondition for Selection<F>
where
    F: Fn(&ProfileVector) -> bool,
{
    fn accept(&self, profile: &ProfileVector) -> bool {
        (self.accept)(profile)
    }

    fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    fn name(&self) -> &str {
        "Selection"
    }
}

impl<F> fmt::Debug for Selection<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .finish_non_exhaustive()
    }
}
