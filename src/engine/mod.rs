// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Profile enumeration engine.
//!
//! The engine sums [`exact_profile_count`](crate::profile::exact_profile_count)
//! over every profile that a [`SelectionCondition`] accepts.
//!
//! # Search tree
//!
//! Each level of the tree fixes the count for one run length, from the
//! maximum length down to the minimum. At the level for length `L` with
//! `budget` elements still unassigned, the choices are counts
//! `0..=budget / L`. A path reaches a leaf when the next length is below the
//! minimum or the remaining budget is too small for even one more minimal
//! run. Leaves are exactly the realizable profiles within the bounds.
//!
//! # Architecture
//!
//! The traversal is iterative. The engine keeps an explicit stack of frames,
//! one per level on the current path, each tracking:
//! - Which length the level assigns
//! - The element budget on entry to the level
//! - The next count to try and the largest count that fits
//! - The trail checkpoint taken on entry
//!
//! Writes to the profile go through the context's trail. Before each sibling
//! choice and when a level is exhausted, the trail is rewound to the level's
//! checkpoint, so every slot is restored to its value before the level was
//! entered. After the traversal the profile is all zeros again.
//!
//! # Cost
//!
//! The number of leaves is the number of partitions of at most `n` elements
//! into parts within the bounds, which grows faster than any polynomial in
//! `n`. Each leaf costs one table-driven evaluation of the closed form. There
//! is no cancellation: prefer queries with tight bounds for large `n`.
//!
//! # Example
//!
//! ```
//! use run_count::engine::{AcceptAll, ProfileEnumerator};
//! use run_count::state::Counters;
//! use run_count::arith::factorial;
//!
//! // Every permutation has exactly one profile.
//! let enumeration = ProfileEnumerator::new(6, &AcceptAll).unwrap().run();
//! assert_eq!(enumeration.total, factorial(6));
//! // One leaf per multiset of parts >= 2 summing to at most 6.
//! assert_eq!(enumeration.statistics.get(Counters::ProfilesVisited), 11);
//! ```

pub mod selection;

pub use selection::{AcceptAll, Selection, SelectionCondition};

use crate::arith::Count;
use crate::context::EnumerationContext;
use crate::error::{check_element_count, CountError, Result};
use crate::profile::exact::exact_count_with_memo;
use crate::state::statistics::{Counters, Statistics};
use num_traits::Zero;

/// Stack entry tracking one level of the search tree.
#[derive(Debug)]
struct Frame {
    /// Run length whose count this level chooses.
    length: usize,

    /// Unassigned elements on entry to this level.
    budget: usize,

    /// Next count to try.
    next_count: usize,

    /// Largest count that fits in `budget`.
    max_count: usize,

    /// Trail checkpoint for this level.
    trail_checkpoint: usize,
}

/// Outcome of a complete enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// Sum of exact counts over the accepted profiles.
    pub total: Count,

    /// What the traversal visited.
    pub statistics: Statistics,
}

/// Depth-first enumerator over the profiles of `n` elements.
///
/// One enumerator serves one traversal: [`ProfileEnumerator::run`] consumes
/// it, so the in-flight profile can never be shared between calls.
pub struct ProfileEnumerator<'a, C: SelectionCondition + ?Sized> {
    /// Decides which leaves count.
    condition: &'a C,

    /// Smallest length whose count is varied.
    min_length: usize,

    /// Largest length whose count is varied (already clamped to `n`).
    max_length: usize,

    /// Profile, trail, memo tables and counters.
    ctx: EnumerationContext,

    /// Levels on the current path.
    stack: Vec<Frame>,
}

impl<'a, C: SelectionCondition + ?Sized> ProfileEnumerator<'a, C> {
    /// Prepare an enumeration of the profiles of `n` elements.
    ///
    /// The condition's bounds default to `[2, n]`; a maximum above `n` is
    /// clamped to `n`. A maximum below the minimum leaves only the empty
    /// profile.
    ///
    /// # Errors
    ///
    /// - [`CountError::InvalidElementCount`] if `n == 0`
    /// - [`CountError::InvalidRunLength`] if the condition's minimum is below 2
    pub fn new(n: usize, condition: &'a C) -> Result<Self> {
        check_element_count(n)?;
        let min_length = condition.min_length().unwrap_or(2);
        if min_length < 2 {
            return Err(CountError::InvalidRunLength {
                length: min_length,
                n,
            });
        }
        let max_length = condition.max_length().map_or(n, |max| max.min(n));

        Ok(Self {
            condition,
            min_length,
            max_length,
            ctx: EnumerationContext::new(n),
            stack: Vec::with_capacity(max_length),
        })
    }

    /// Effective `(min_length, max_length)` after defaults and clamping.
    pub fn bounds(&self) -> (usize, usize) {
        (self.min_length, self.max_length)
    }

    /// Walk the whole tree and return the accumulated total.
    ///
    /// Consumes the enumerator; the profile vector, trail and memo are
    /// dropped with it.
    pub fn run(mut self) -> Enumeration {
        let n = self.ctx.num_elements();
        tracing::debug!(
            n,
            min_length = self.min_length,
            max_length = self.max_length,
            condition = self.condition.name(),
            "enumerating profiles"
        );

        let mut total = Count::zero();
        match self.enter_level(self.max_length, n) {
            Some(root) => self.stack.push(root),
            None => total += self.visit_leaf(),
        }

        while let Some(frame) = self.stack.last_mut() {
            if frame.next_count > frame.max_count {
                // Level exhausted: restore its slot and backtrack.
                let checkpoint = frame.trail_checkpoint;
                self.stack.pop();
                self.ctx.rewind_to(checkpoint);
                continue;
            }

            let length = frame.length;
            let count = frame.next_count;
            let remaining = frame.budget - count * length;
            let checkpoint = frame.trail_checkpoint;
            frame.next_count += 1;

            self.ctx.rewind_to(checkpoint);
            self.ctx.set_count(length, count);
            self.ctx.statistics.increment_counter(Counters::ChoicesTried);

            match self.enter_level(length - 1, remaining) {
                Some(child) => self.stack.push(child),
                None => total += self.visit_leaf(),
            }
        }

        debug_assert!(self.ctx.profile().is_empty(), "profile not restored");
        debug_assert!(self.ctx.trail.is_empty(), "trail not unwound");

        tracing::debug!(n, %total, statistics = %self.ctx.statistics, "enumeration complete");
        Enumeration {
            total,
            statistics: self.ctx.statistics,
        }
    }

    /// Frame for the level assigning `length`, or `None` if the path ends
    /// here with a complete profile.
    fn enter_level(&mut self, length: usize, budget: usize) -> Option<Frame> {
        if length < self.min_length || budget < self.min_length {
            return None;
        }
        self.ctx.statistics.increment_counter(Counters::LevelsEntered);
        Some(Frame {
            length,
            budget,
            next_count: 0,
            max_count: budget / length,
            trail_checkpoint: self.ctx.checkpoint(),
        })
    }

    /// Evaluate the complete profile currently in the context.
    fn visit_leaf(&mut self) -> Count {
        self.ctx.statistics.increment_counter(Counters::ProfilesVisited);
        if !self.condition.accept(self.ctx.profile()) {
            return Count::zero();
        }
        self.ctx.statistics.increment_counter(Counters::ProfilesAccepted);
        let count = exact_count_with_memo(&self.ctx.memo, self.ctx.profile());
        tracing::trace!(profile = %self.ctx.profile().to_profile(), %count, "accepted profile");
        count
    }
}

/// Sum of exact-profile counts over every profile of `n` elements that
/// `condition` accepts.
///
/// # Errors
///
/// See [`ProfileEnumerator::new`].
pub fn sum_over_profiles<C: SelectionCondition + ?Sized>(n: usize, condition: &C) -> Result<Count> {
    Ok(ProfileEnumerator::new(n, condition)?.run().total)
}
