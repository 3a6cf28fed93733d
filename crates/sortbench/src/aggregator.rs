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

//! Result aggregation across the benchmark matrix.
//!
//! Drives the cross product of {distribution × size × algorithm}: one
//! dataset per (distribution, size) pair, shared by every algorithm at
//! that point, with cost-guarded algorithms skipped above their bound.
//! Emission order is iteration order; display order belongs to the
//! report formatter.

use crate::config::BenchConfig;
use crate::error::Result;
use crate::report::ResultRow;
use crate::runner::bench_median;
use sortbench_core::{generate, Algorithm, Distribution};

/// Runs the full benchmark matrix and collects one row per valid point.
///
/// The registry is an immutable table the caller builds once at startup
/// and passes in explicitly; the aggregator holds no global state.
/// Sizes are deduplicated up front, so the returned rows never contain
/// duplicate `(distribution, n, algorithm)` keys.
///
/// # Errors
///
/// Fails fast on an invalid configuration; nothing is benchmarked in
/// that case. Benchmarking is strictly sequential: concurrent timed
/// runs would contaminate each other's wall-clock measurements.
pub fn run_matrix(config: &BenchConfig, registry: &[Algorithm]) -> Result<Vec<ResultRow>> {
    config.validate()?;

    let sizes = config.effective_sizes();
    let mut rows = Vec::new();

    for distribution in Distribution::all() {
        for &n in &sizes {
            let data = generate(distribution, n);
            for algorithm in registry {
                if !algorithm.applies_to(n) {
                    continue;
                }
                let elapsed = bench_median(algorithm, &data, config.repeats)?;
                rows.push(ResultRow::new(
                    distribution,
                    n,
                    algorithm.name,
                    elapsed.as_secs_f64(),
                ));
            }
        }
    }

    Ok(rows)
}
