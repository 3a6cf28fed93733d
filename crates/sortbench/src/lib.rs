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

//! Sortbench harness: measurement protocol, aggregation, and reporting.
//!
//! Compares sorting algorithms across input distributions and sizes and
//! renders the results as a reproducible, deterministically ordered
//! table.
//!
//! # Modules
//!
//! - `config`: Run configuration (sizes, repeats, cost-guard)
//! - `runner`: Timed execution and median reduction
//! - `aggregator`: The {distribution × size × algorithm} matrix
//! - `report`: Result rows and table/JSON rendering
//! - `error`: Structured harness errors
//!
//! # Usage
//!
//! ```no_run
//! use sortbench::{run_matrix, render_table, sort_rows, BenchConfig};
//! use sortbench_core::default_registry;
//!
//! let config = BenchConfig::default();
//! let registry = default_registry(config.max_insertion);
//! let mut rows = run_matrix(&config, &registry)?;
//! sort_rows(&mut rows);
//! println!("{}", render_table(&rows));
//! # Ok::<(), sortbench::BenchError>(())
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;

pub use aggregator::run_matrix;
pub use config::{BenchConfig, DEFAULT_MAX_INSERTION, DEFAULT_REPEATS, DEFAULT_SIZES};
pub use error::{validate_dataset_size, BenchError, Result, MAX_DATASET_SIZE};
pub use report::{render_json, render_table, sort_rows, ResultRow, HEADERS};
pub use runner::{bench_median, bench_once, median};
