// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The brute-force oracle walks every permutation of `n` elements, records
//! the lengths of its maximal runs, and keeps a histogram keyed by profile.
//! Every query can then be answered from the histogram without touching the
//! library's formulas.

#![allow(dead_code)]

use run_count::{Count, McsProfile};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Largest `n` the oracle walks (11! is about 40 million permutations).
pub const MAX_BRUTE_FORCE: usize = 11;

/// Each length's count takes one nibble of the key.
const KEY_BITS: usize = 4;

/// Permutations of `n` elements grouped by the multiset of their run lengths.
#[derive(Debug)]
pub struct BruteForce {
    n: usize,
    /// `(counts, permutations)` where `counts[L]` is the number of maximal
    /// runs of length `L`, for `L` in `0..=n`.
    histogram: Vec<(Vec<usize>, u64)>,
}

static CACHE: [OnceLock<BruteForce>; MAX_BRUTE_FORCE + 1] =
    [const { OnceLock::new() }; MAX_BRUTE_FORCE + 1];

/// The oracle for `n`, built on first use and shared by later callers.
pub fn brute_force(n: usize) -> &'static BruteForce {
    assert!(
        (1..=MAX_BRUTE_FORCE).contains(&n),
        "brute force only covers 1..={}",
        MAX_BRUTE_FORCE
    );
    CACHE[n].get_or_init(|| BruteForce::build(n))
}

/// Visit every permutation of `0..n` once (Heap's algorithm, iterative).
pub fn for_each_permutation(n: usize, mut visit: impl FnMut(&[u8])) {
    let mut perm: Vec<u8> = (0..n as u8).collect();
    let mut c = vec![0usize; n];
    visit(&perm);
    let mut i = 1;
    while i < n {
        if c[i] < i {
            if i % 2 == 0 {
                perm.swap(0, i);
            } else {
                perm.swap(c[i], i);
            }
            visit(&perm);
            c[i] += 1;
            i = 1;
        } else {
            c[i] = 0;
            i += 1;
        }
    }
}

/// Lengths of the maximal runs of `perm`, left to right.
pub fn run_lengths(perm: &[u8]) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut current = 1;
    for pair in perm.windows(2) {
        if pair[1] == pair[0] + 1 {
            current += 1;
            continue;
        }
        if current >= 2 {
            runs.push(current);
        }
        current = 1;
    }
    if current >= 2 {
        runs.push(current);
    }
    runs
}

fn profile_key(perm: &[u8]) -> u64 {
    let mut key = 0u64;
    let mut current = 1;
    for pair in perm.windows(2) {
        if pair[1] == pair[0] + 1 {
            current += 1;
            continue;
        }
        if current >= 2 {
            key += 1 << (KEY_BITS * (current - 2));
        }
        current = 1;
    }
    if current >= 2 {
        key += 1 << (KEY_BITS * (current - 2));
    }
    key
}

impl BruteForce {
    fn build(n: usize) -> Self {
        let mut by_key: HashMap<u64, u64> = HashMap::new();
        for_each_permutation(n, |perm| {
            *by_key.entry(profile_key(perm)).or_insert(0) += 1;
        });

        let mut histogram: Vec<(Vec<usize>, u64)> = by_key
            .into_iter()
            .map(|(key, permutations)| {
                let mut counts = vec![0usize; n + 1];
                for (length, slot) in counts.iter_mut().enumerate().skip(2) {
                    *slot = ((key >> (KEY_BITS * (length - 2))) & 0xF) as usize;
                }
                (counts, permutations)
            })
            .collect();
        histogram.sort();
        Self { n, histogram }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Every profile that occurs, with the number of permutations having it.
    pub fn profiles(&self) -> impl Iterator<Item = (McsProfile, Count)> + '_ {
        self.histogram.iter().map(|(counts, permutations)| {
            let profile = counts
                .iter()
                .enumerate()
                .filter(|&(_, &count)| count > 0)
                .map(|(length, &count)| (length, count))
                .collect();
            (profile, Count::from(*permutations))
        })
    }

    /// Number of permutations whose run counts satisfy `keep`.
    pub fn count_where(&self, keep: impl Fn(&[usize]) -> bool) -> Count {
        let total: u64 = self
            .histogram
            .iter()
            .filter(|(counts, _)| keep(counts.as_slice()))
            .map(|(_, permutations)| permutations)
            .sum();
        Count::from(total)
    }

    pub fn total(&self) -> Count {
        self.count_where(|_| true)
    }

    pub fn no_runs(&self) -> Count {
        self.count_where(|counts| counts.iter().all(|&c| c == 0))
    }

    /// At least one run, every run in `[min, max]`.
    pub fn runs_only_in(&self, min: usize, max: usize) -> Count {
        self.count_where(|counts| {
            let inside = counts.iter().enumerate().any(|(l, &c)| c > 0 && (min..=max).contains(&l));
            let outside = counts.iter().enumerate().any(|(l, &c)| c > 0 && !(min..=max).contains(&l));
            inside && !outside
        })
    }

    pub fn some_run_at_least(&self, min: usize) -> Count {
        self.count_where(|counts| counts.iter().skip(min).any(|&c| c > 0))
    }

    /// Exactly `k` consecutive sequences of `length`, maximal or not.
    pub fn sequences_of_length(&self, length: usize, k: usize) -> Count {
        self.count_where(|counts| {
            let sequences: usize = counts
                .iter()
                .enumerate()
                .skip(length)
                .map(|(l, &c)| c * (l - length + 1))
                .sum();
            sequences == k
        })
    }

    /// Entry `k` counts the permutations with exactly `k` adjacent pairs.
    pub fn by_pairs(&self) -> Vec<Count> {
        (0..self.n)
            .map(|k| self.sequences_of_length(2, k))
            .collect()
    }
}

/// Shorthand for building expected values.
pub fn count(value: u64) -> Count {
    Count::from(value)
}
