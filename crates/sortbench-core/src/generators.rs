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

//! Synthetic dataset generators.
//!
//! One generator per input distribution: seeded-random, ascending
//! (`sorted`), and descending (`reversed`). All generators are
//! deterministic given their parameters and run in O(n), so every
//! algorithm at a given benchmark point sees identical data.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Seed used for the random distribution when none is supplied.
pub const DEFAULT_SEED: u64 = 42;

/// Magnitude bound for random values: uniform in `[-VALUE_RANGE, VALUE_RANGE]`.
pub const VALUE_RANGE: i64 = 1_000_000_000;

/// Shape of a generated dataset before sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distribution {
    /// Seeded uniform random values.
    Random,
    /// Ascending run `0, 1, …, n-1`.
    Sorted,
    /// Descending run `n, n-1, …, 1`.
    Reversed,
}

impl Distribution {
    /// Returns the distribution's stable report name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Sorted => "sorted",
            Distribution::Reversed => "reversed",
        }
    }

    /// All distributions in the fixed benchmark iteration order.
    pub fn all() -> [Distribution; 3] {
        [
            Distribution::Random,
            Distribution::Sorted,
            Distribution::Reversed,
        ]
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates `n` uniformly distributed signed integers from a seeded RNG.
///
/// The same `(n, seed)` pair always yields the identical sequence, so
/// repeated runs and distinct algorithms compare on identical data.
///
/// # Arguments
///
/// * `n` - Number of elements to generate
/// * `seed` - RNG seed for reproducibility
pub fn random(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| rng.gen_range(-VALUE_RANGE..=VALUE_RANGE))
        .collect()
}

/// Generates the ascending sequence `0, 1, …, n-1`.
pub fn sorted(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

/// Generates the descending sequence `n, n-1, …, 1`.
pub fn reversed(n: usize) -> Vec<i64> {
    (1..=n as i64).rev().collect()
}

/// Generates a dataset of the given distribution and size.
///
/// The random distribution uses [`DEFAULT_SEED`].
pub fn generate(distribution: Distribution, n: usize) -> Vec<i64> {
    match distribution {
        Distribution::Random => random(n, DEFAULT_SEED),
        Distribution::Sorted => sorted(n),
        Distribution::Reversed => reversed(n),
    }
}
