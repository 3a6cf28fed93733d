// Sortbench - Sorting Micro-Benchmark Harness
//
// Copyright (c) 2025 Sortbench contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Property-based tests for the sorting algorithms using proptest.
//!
//! For arbitrary inputs every algorithm must return a non-decreasing
//! permutation of its input, all four must agree with each other, and
//! the copy-based entry points must leave the caller's data untouched.

use proptest::prelude::*;
use sortbench_core::{
    default_registry, generate, insertion_sort, merge_sort, std_sort, std_sorted, Distribution,
};

// ===== Test Helpers =====

fn is_non_decreasing(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Permutation check via sorted multiset comparison.
fn same_multiset(a: &[i64], b: &[i64]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

fn dataset() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..200)
}

proptest! {
    #[test]
    fn insertion_sort_is_sorted_permutation(input in dataset()) {
        let output = insertion_sort(&input);
        prop_assert!(is_non_decreasing(&output));
        prop_assert!(same_multiset(&input, &output));
    }

    #[test]
    fn merge_sort_is_sorted_permutation(input in dataset()) {
        let output = merge_sort(&input);
        prop_assert!(is_non_decreasing(&output));
        prop_assert!(same_multiset(&input, &output));
    }

    #[test]
    fn std_entry_points_agree(input in dataset()) {
        let copied = std_sorted(&input);
        let mut mutated = input.clone();
        std_sort(&mut mutated);
        prop_assert_eq!(&copied, &mutated);
        prop_assert!(is_non_decreasing(&copied));
    }

    #[test]
    fn all_algorithms_agree(input in dataset()) {
        let reference = std_sorted(&input);
        for alg in default_registry(usize::MAX) {
            prop_assert_eq!(alg.sort_copy(&input), reference.clone(), "{}", alg.name);
        }
    }

    #[test]
    fn copy_based_sorts_leave_input_intact(input in dataset()) {
        let snapshot = input.clone();
        let _ = insertion_sort(&input);
        let _ = merge_sort(&input);
        let _ = std_sorted(&input);
        prop_assert_eq!(input, snapshot);
    }
}

// ===== Fixed-size correctness over every distribution =====

#[test]
fn all_algorithms_sort_every_distribution() {
    let registry = default_registry(usize::MAX);
    for distribution in Distribution::all() {
        for n in [0usize, 1, 2, 50, 1000] {
            let data = generate(distribution, n);
            for alg in &registry {
                let output = alg.sort_copy(&data);
                assert!(
                    is_non_decreasing(&output),
                    "{} on {} n={}",
                    alg.name,
                    distribution,
                    n
                );
                assert!(same_multiset(&data, &output));
            }
        }
    }
}
