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

//! Benchmark runner: timed execution and median reduction.
//!
//! Times single executions with a monotonic `Instant` pair and reduces
//! repeated samples to their median rather than their mean, so one
//! scheduling-induced outlier cannot skew the estimate. Dataset copies
//! for in-place algorithms are made outside the timed region.

use crate::error::{BenchError, Result};
use sortbench_core::{Algorithm, SortKind};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Times exactly one execution of `algorithm` over `data`.
///
/// Copy-based algorithms receive the shared dataset directly; in-place
/// algorithms receive a disposable copy made before the clock starts,
/// so copy cost never lands in the measurement and mutation never leaks
/// into later runs.
pub fn bench_once(algorithm: &Algorithm, data: &[i64]) -> Duration {
    match algorithm.kind {
        SortKind::Copying(f) => {
            let start = Instant::now();
            let sorted = f(black_box(data));
            let elapsed = start.elapsed();
            black_box(sorted);
            elapsed
        }
        SortKind::InPlace(f) => {
            let mut scratch = data.to_vec();
            let start = Instant::now();
            f(black_box(&mut scratch));
            let elapsed = start.elapsed();
            black_box(scratch);
            elapsed
        }
    }
}

/// Runs `algorithm` over `data` `repeats` times and returns the median
/// duration.
///
/// A repeat count of 1 degrades gracefully to a single raw measurement.
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] when `repeats` is zero.
pub fn bench_median(algorithm: &Algorithm, data: &[i64], repeats: usize) -> Result<Duration> {
    if repeats == 0 {
        return Err(BenchError::invalid_config("repeats", "must be at least 1"));
    }
    let samples: Vec<Duration> = (0..repeats).map(|_| bench_once(algorithm, data)).collect();
    Ok(median(&samples))
}

/// Returns the median of a set of timing samples.
///
/// Odd counts yield the middle sample; even counts yield the mean of
/// the two middle samples. An empty slice yields zero. Kept separate
/// from the timing loop so the reduction is testable against synthetic
/// samples.
pub fn median(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted = samples.to_vec();
    sorted.sort();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2
    }
}
