// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the profile enumerator.
//!
//! Each write to a slot of the dense profile is recorded as `(slot, old
//! value)`. Rewinding to a checkpoint replays the recorded writes in reverse,
//! so the profile is restored slot by slot to exactly the state it had when
//! the checkpoint was taken.

use crate::profile::ProfileVector;

/// A single entry in the trail, recording one slot write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    /// Run length whose count was overwritten.
    length: usize,
    /// Count before the write.
    old_count: usize,
}

/// Undo log for a [`ProfileVector`].
///
/// # Memory Model
///
/// - DYNAMIC: the trail changes during the traversal
/// - Each enumeration context owns its own trail; nothing is shared between
///   top-level calls
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trail with room for `capacity` writes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Current position, to be passed back to [`Trail::rewind_to`].
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Write `count` into `profile[length]`, recording the previous value.
    pub fn record_and_set(&mut self, profile: &mut ProfileVector, length: usize, count: usize) {
        let old_count = profile.replace(length, count);
        self.entries.push(TrailEntry { length, old_count });
    }

    /// Undo every write made after `checkpoint`, newest first.
    ///
    /// Returns the number of writes undone.
    pub fn rewind_to(&mut self, profile: &mut ProfileVector, checkpoint: usize) -> usize {
        let mut undone = 0;
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                profile.replace(entry.length, entry.old_count);
                undone += 1;
            }
        }
        undone
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
