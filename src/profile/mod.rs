// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run-length profiles: how many maximal consecutive sequences of each length.
//!
//! A profile says, for each run length, how many maximal consecutive runs of
//! exactly that length a permutation has. Two representations are used:
//!
//! - [`McsProfile`]: sparse, ordered map from length to count. This is what
//!   callers build and what [`exact_profile_count`] consumes.
//! - [`ProfileVector`]: dense vector indexed by length `0..=n`, entries at 0
//!   and 1 always zero. This is what the enumerator mutates in place and what
//!   selection conditions inspect.
//!
//! # Examples
//!
//! ```
//! use run_count::profile::McsProfile;
//!
//! let profile: McsProfile = "3:1,2:2".parse().unwrap();
//! assert_eq!(profile.count(2), 2);
//! assert_eq!(profile.count(4), 0);
//! assert_eq!(profile.combined_length(), 7);
//! assert_eq!(profile.total_runs(), 3);
//! assert_eq!(profile.to_string(), "2:2,3:1");
//! ```

pub mod exact;

pub use exact::exact_profile_count;

use crate::error::CountError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Sparse profile: run length → number of maximal runs of that length.
///
/// Lengths that are absent have count zero. Explicit zero counts are accepted
/// and behave exactly like absent lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct McsProfile {
    counts: BTreeMap<usize, usize>,
}

impl McsProfile {
    /// The empty profile: no runs at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`McsProfile::set`].
    pub fn with(mut self, length: usize, count: usize) -> Self {
        self.set(length, count);
        self
    }

    /// Request `count` maximal runs of `length`, replacing any earlier value.
    pub fn set(&mut self, length: usize, count: usize) {
        if count == 0 {
            self.counts.remove(&length);
        } else {
            self.counts.insert(length, count);
        }
    }

    /// Number of runs requested for `length`.
    pub fn count(&self, length: usize) -> usize {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    /// `(length, count)` pairs with nonzero count, by increasing length.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&length, &count)| (length, count))
    }

    /// True if no run is requested.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of elements covered by the requested runs, saturating
    /// at `usize::MAX`.
    pub fn combined_length(&self) -> usize {
        self.iter()
            .fold(0usize, |total, (length, count)| total.saturating_add(length.saturating_mul(count)))
    }

    /// Total number of requested runs, of any length.
    pub fn total_runs(&self) -> usize {
        self.counts.values().fold(0usize, |total, &count| total.saturating_add(count))
    }

    /// Longest requested run length, if any.
    pub fn max_length(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    /// Whether the runs fit in a permutation of `n` elements.
    pub fn is_realizable(&self, n: usize) -> bool {
        self.combined_length() <= n
    }
}

impl FromIterator<(usize, usize)> for McsProfile {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut profile = McsProfile::new();
        for (length, count) in iter {
            let total = profile.count(length) + count;
            profile.set(length, total);
        }
        profile
    }
}

impl fmt::Display for McsProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (length, count) in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}:{}", length, count)?;
            first = false;
        }
        Ok(())
    }
}

/// Parses `"length:count,length:count,..."`. Whitespace around items is
/// ignored; the empty string and `"{}"` are the empty profile.
impl FromStr for McsProfile {
    type Err = CountError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| CountError::InvalidProfile {
            text: text.to_string(),
            reason,
        };

        let body = text.trim();
        let body = body
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(body);

        let mut profile = McsProfile::new();
        for item in body.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let (length, count) = item
                .split_once(':')
                .ok_or_else(|| invalid(format!("item {:?} is not length:count", item)))?;
            let length: usize = length
                .trim()
                .parse()
                .map_err(|e| invalid(format!("bad length {:?}: {}", length.trim(), e)))?;
            let count: usize = count
                .trim()
                .parse()
                .map_err(|e| invalid(format!("bad count {:?}: {}", count.trim(), e)))?;
            if profile.count(length) != 0 {
                return Err(invalid(format!("length {} given twice", length)));
            }
            profile.set(length, count);
        }
        Ok(profile)
    }
}

/// Dense profile over lengths `0..=n`.
///
/// Reads outside `0..=n` return zero, so a selection condition can index any
/// length without bounds checks of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileVector {
    counts: Vec<usize>,
}

impl ProfileVector {
    /// All-zero profile for permutations of `n` elements.
    pub fn zeros(n: usize) -> Self {
        Self {
            counts: vec![0; n + 1],
        }
    }

    /// Dense copy of a sparse profile. Lengths above `n` are dropped.
    pub fn from_profile(n: usize, profile: &McsProfile) -> Self {
        let mut vector = Self::zeros(n);
        for (length, count) in profile.iter().filter(|&(length, _)| length <= n) {
            vector.counts[length] = count;
        }
        vector
    }

    /// Number of permuted elements this vector was sized for.
    pub fn num_elements(&self) -> usize {
        self.counts.len() - 1
    }

    /// Count for `length`; zero outside `0..=n`.
    pub fn count(&self, length: usize) -> usize {
        self.counts.get(length).copied().unwrap_or(0)
    }

    /// The raw counts, indexed by length.
    pub fn as_slice(&self) -> &[usize] {
        &self.counts
    }

    /// `(length, count)` pairs with nonzero count, by increasing length.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count != 0)
            .map(|(length, &count)| (length, count))
    }

    /// True if every entry is zero.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Sparse copy.
    pub fn to_profile(&self) -> McsProfile {
        self.iter_nonzero().collect()
    }

    /// Overwrite one slot, returning the previous value. Only the trail-aware
    /// context writes through this.
    pub(crate) fn replace(&mut self, length: usize, count: usize) -> usize {
        std::mem::replace(&mut self.counts[length], count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_zero_is_absent() {
        let profile = McsProfile::new().with(2, 0).with(3, 1);
        assert_eq!(profile, McsProfile::new().with(3, 1));
        assert_eq!(profile.iter().collect::<Vec<_>>(), vec![(3, 1)]);
    }

    #[test]
    fn test_realizable() {
        let profile = McsProfile::new().with(2, 2).with(3, 1);
        assert!(profile.is_realizable(7));
        assert!(!profile.is_realizable(6));
        assert!(McsProfile::new().is_realizable(1));
        assert_eq!(profile.max_length(), Some(3));
    }

    #[test]
    fn test_from_iter_accumulates() {
        let profile: McsProfile = vec![(2, 1), (4, 1), (2, 2)].into_iter().collect();
        assert_eq!(profile.count(2), 3);
        assert_eq!(profile.count(4), 1);
    }

    #[test]
    fn test_parse_round_trip() {
        let profile: McsProfile = " { 4:1 , 2:3 } ".parse().unwrap();
        assert_eq!(profile, McsProfile::new().with(2, 3).with(4, 1));
        assert_eq!(profile.to_string(), "2:3,4:1");
        assert_eq!("".parse::<McsProfile>().unwrap(), McsProfile::new());
        assert_eq!("{}".parse::<McsProfile>().unwrap(), McsProfile::new());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "2=1".parse::<McsProfile>(),
            Err(CountError::InvalidProfile { .. })
        ));
        assert!(matches!(
            "2:x".parse::<McsProfile>(),
            Err(CountError::InvalidProfile { .. })
        ));
        assert!(matches!(
            "2:1,2:1".parse::<McsProfile>(),
            Err(CountError::InvalidProfile { .. })
        ));
        assert!(matches!(
            "-2:1".parse::<McsProfile>(),
            Err(CountError::InvalidProfile { .. })
        ));
    }

    #[test]
    fn test_vector_reads_out_of_range_as_zero() {
        let vector = ProfileVector::from_profile(5, &McsProfile::new().with(2, 1).with(9, 1));
        assert_eq!(vector.num_elements(), 5);
        assert_eq!(vector.count(2), 1);
        assert_eq!(vector.count(9), 0);
        assert_eq!(vector.count(100), 0);
        assert_eq!(vector.as_slice(), &[0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_vector_round_trip() {
        let profile = McsProfile::new().with(2, 1).with(3, 2);
        let vector = ProfileVector::from_profile(8, &profile);
        assert_eq!(vector.to_profile(), profile);
        assert!(!vector.is_empty());
        assert!(ProfileVector::zeros(4).is_empty());
    }

    #[test]
    fn test_vector_replace() {
        let mut vector = ProfileVector::zeros(4);
        assert_eq!(vector.replace(3, 1), 0);
        assert_eq!(vector.replace(3, 0), 1);
        assert!(vector.is_empty());
    }
}
