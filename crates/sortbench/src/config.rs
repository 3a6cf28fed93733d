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

//! Centralized benchmark configuration.
//!
//! Holds the dataset sizes, repeat count, and the insertion-sort
//! cost-guard. Validation happens once, before anything is benchmarked,
//! so a malformed configuration never produces partial results.

use crate::error::{validate_dataset_size, BenchError, Result};

/// Default dataset sizes.
pub const DEFAULT_SIZES: &[usize] = &[1_000, 5_000, 10_000, 20_000];

/// Default number of timed repetitions per benchmark point.
pub const DEFAULT_REPEATS: usize = 5;

/// Default maximum `n` for the quadratic insertion sort.
pub const DEFAULT_MAX_INSERTION: usize = 10_000;

/// Benchmark run configuration.
///
/// # Example
///
/// ```
/// use sortbench::config::BenchConfig;
///
/// let config = BenchConfig::default()
///     .with_sizes(&[500, 2_000])
///     .with_repeats(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Dataset sizes to benchmark.
    pub sizes: Vec<usize>,
    /// Timed repetitions per point, reduced via median.
    pub repeats: usize,
    /// Size above which insertion sort is excluded.
    pub max_insertion: usize,
}

impl BenchConfig {
    /// Creates a configuration from explicit values.
    pub fn new(sizes: &[usize], repeats: usize, max_insertion: usize) -> Self {
        Self {
            sizes: sizes.to_vec(),
            repeats,
            max_insertion,
        }
    }

    /// Sets the dataset sizes.
    pub fn with_sizes(mut self, sizes: &[usize]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    /// Sets the repeat count.
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Sets the insertion-sort cost-guard.
    pub fn with_max_insertion(mut self, max_insertion: usize) -> Self {
        self.max_insertion = max_insertion;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] for an empty size list, a
    /// zero repeat count, or a zero cost-guard, and
    /// [`BenchError::DatasetTooLarge`] for any size above the harness
    /// limit.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::invalid_config(
                "sizes",
                "at least one dataset size is required",
            ));
        }
        for &size in &self.sizes {
            validate_dataset_size(size)?;
        }
        if self.repeats == 0 {
            return Err(BenchError::invalid_config(
                "repeats",
                "must be at least 1",
            ));
        }
        if self.max_insertion == 0 {
            return Err(BenchError::invalid_config(
                "max-insertion",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Returns the size list with duplicates removed.
    ///
    /// First occurrence wins and order is otherwise preserved, so a
    /// duplicated `--sizes` entry cannot produce duplicate result-row
    /// keys.
    pub fn effective_sizes(&self) -> Vec<usize> {
        let mut seen = std::collections::HashSet::new();
        self.sizes
            .iter()
            .copied()
            .filter(|size| seen.insert(*size))
            .collect()
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZES, DEFAULT_REPEATS, DEFAULT_MAX_INSERTION)
    }
}
