// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Identities linking the queries to each other, checked well beyond the
//! sizes the brute-force walk can reach.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use pretty_assertions::assert_eq;
use run_count::engine::{sum_over_profiles, AcceptAll, Selection};
use run_count::queries::{
    at_least_one_run_at_least, at_least_one_run_in_length_range, by_adjacent_pair_count,
    exact_count_of_runs_of_length, number_of_permutations, probability_of_run_at_least,
};
use run_count::{exact_profile_count, factorial, no_run_count, range_product, Count, McsProfile, ProfileVector};

const LARGEST: usize = 15;

#[test]
fn test_no_run_sequence_start() {
    let expected: Vec<Count> = [1u32, 1, 3, 11, 53, 309, 2119, 16687, 148329, 1468457]
        .into_iter()
        .map(Count::from)
        .collect();
    let actual: Vec<Count> = (1..=10).map(|n| no_run_count(n).unwrap()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_factorial_is_range_product() {
    for n in 1..=40usize {
        assert_eq!(number_of_permutations(n).unwrap(), range_product(1u32, n as u32));
        assert_eq!(factorial(n), range_product(1u32, n as u32));
    }
}

#[test]
fn test_all_profiles_sum_to_factorial() {
    for n in 1..=LARGEST + 5 {
        assert_eq!(sum_over_profiles(n, &AcceptAll).unwrap(), factorial(n), "n = {}", n);
    }
}

#[test]
fn test_zero_sequences_split_into_short_runs_and_no_runs() {
    for n in 3..=LARGEST {
        for length in 3..=n {
            assert_eq!(
                exact_count_of_runs_of_length(n, length, 0).unwrap(),
                at_least_one_run_in_length_range(n, 2, length - 1).unwrap() + no_run_count(n).unwrap(),
                "n = {}, length = {}",
                n,
                length
            );
        }
    }
}

#[test]
fn test_some_sequences_is_at_least_one_long_run() {
    for n in 2..=LARGEST {
        for length in 2..=n {
            let some: Count = (1..=n - length + 1)
                .map(|k| exact_count_of_runs_of_length(n, length, k).unwrap())
                .sum();
            assert_eq!(some, at_least_one_run_at_least(n, length).unwrap(), "n = {}, length = {}", n, length);
        }
    }
}

#[test]
fn test_pair_counts_match_profile_sums() {
    for n in 1..=LARGEST {
        let by_pairs = by_adjacent_pair_count(n).unwrap();
        for (k, expected) in by_pairs.iter().enumerate() {
            let with_k_pairs = Selection::new(|profile: &ProfileVector| {
                profile.iter_nonzero().map(|(length, c)| (length - 1) * c).sum::<usize>() == k
            });
            assert_eq!(&sum_over_profiles(n, &with_k_pairs).unwrap(), expected, "n = {}, k = {}", n, k);
        }
    }
}

#[test]
fn test_probability_is_exact_ratio() {
    for n in 2..=LARGEST {
        for min in 2..=n {
            let ratio = BigRational::new(
                BigInt::from(at_least_one_run_at_least(n, min).unwrap()),
                BigInt::from(factorial(n)),
            );
            let expected = ratio.to_f64().unwrap();
            assert_eq!(probability_of_run_at_least(n, min).unwrap(), expected);
        }
    }
}

#[test]
fn test_single_run_profiles() {
    // A single run of L glues L elements into one, leaving n - L + 1 to
    // arrange without runs, with the glued block in any of those places.
    for n in 2..=LARGEST {
        for length in 2..=n {
            let base = n - length + 1;
            let expected = no_run_count(base).unwrap() * Count::from(base);
            let profile = McsProfile::new().with(length, 1);
            assert_eq!(exact_profile_count(n, &profile).unwrap(), expected, "n = {}, length = {}", n, length);
        }
    }
}

#[test]
fn test_large_n_stays_exact() {
    let n = 30;
    let total = at_least_one_run_at_least(n, 15).unwrap() + exact_count_of_runs_of_length(n, 15, 0).unwrap();
    assert_eq!(total, factorial(n));
    assert!(!no_run_count(1000).unwrap().is_zero());
}
