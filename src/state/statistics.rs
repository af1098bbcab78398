// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the enumeration context and incremented by the
//! engine as it walks the tree of (length, count) choices.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Interior nodes: a length whose count is about to be chosen.
    LevelsEntered,
    /// Counts tried across all levels.
    ChoicesTried,
    /// Complete profiles presented to the selection condition.
    ProfilesVisited,
    /// Complete profiles the selection condition accepted.
    ProfilesAccepted,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, " ")?;
            }
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
            first = false;
        }
        Ok(())
    }
}
