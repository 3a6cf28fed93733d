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

//! Algorithm registry.
//!
//! An immutable lookup table of benchmarked algorithms, built once at
//! startup and passed explicitly into the aggregator. Each entry carries
//! its mutation policy as a tagged variant so the runner can decide how
//! to hand datasets to it, plus an optional cost-guard bounding the
//! input sizes it participates in.

use crate::algorithms::{insertion_sort, merge_sort, std_sort, std_sorted};

/// Copy-based sort: returns a new vector, input unchanged.
pub type CopyFn = fn(&[i64]) -> Vec<i64>;

/// In-place sort: mutates the slice it is given.
pub type InPlaceFn = fn(&mut [i64]);

/// Mutation policy of a registered algorithm.
///
/// The runner times `Copying` entries directly against the shared
/// dataset and hands `InPlace` entries a disposable copy made outside
/// the timed region.
#[derive(Clone, Copy)]
pub enum SortKind {
    /// Returns a fresh sorted vector.
    Copying(CopyFn),
    /// Sorts the caller's storage.
    InPlace(InPlaceFn),
}

/// A named sorting algorithm with its mutation policy and cost-guard.
#[derive(Clone, Copy)]
pub struct Algorithm {
    /// Display name used in result rows.
    pub name: &'static str,
    /// How the algorithm treats its input.
    pub kind: SortKind,
    /// Maximum `n` this algorithm is benchmarked at, if bounded.
    pub cost_guard: Option<usize>,
}

impl Algorithm {
    /// Returns whether the algorithm participates at size `n`.
    pub fn applies_to(&self, n: usize) -> bool {
        self.cost_guard.map_or(true, |max| n <= max)
    }

    /// Sorts `input` into a new vector regardless of mutation policy.
    ///
    /// Correctness-checking entry point; the runner times the underlying
    /// functions directly so copies stay out of the measured region.
    pub fn sort_copy(&self, input: &[i64]) -> Vec<i64> {
        match self.kind {
            SortKind::Copying(f) => f(input),
            SortKind::InPlace(f) => {
                let mut owned = input.to_vec();
                f(&mut owned);
                owned
            }
        }
    }
}

impl std::fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Algorithm")
            .field("name", &self.name)
            .field("cost_guard", &self.cost_guard)
            .finish()
    }
}

/// Builds the fixed benchmark registry.
///
/// Insertion sort carries a cost-guard of `max_insertion` to keep total
/// run time bounded; the O(n log n) entries are unguarded.
///
/// # Arguments
///
/// * `max_insertion` - Largest `n` at which insertion sort participates
pub fn default_registry(max_insertion: usize) -> Vec<Algorithm> {
    vec![
        Algorithm {
            name: "Insertion",
            kind: SortKind::Copying(insertion_sort::<i64>),
            cost_guard: Some(max_insertion),
        },
        Algorithm {
            name: "Merge",
            kind: SortKind::Copying(merge_sort::<i64>),
            cost_guard: None,
        },
        Algorithm {
            name: "Std sorted",
            kind: SortKind::Copying(std_sorted::<i64>),
            cost_guard: None,
        },
        Algorithm {
            name: "Std sort",
            kind: SortKind::InPlace(std_sort::<i64>),
            cost_guard: None,
        },
    ]
}
