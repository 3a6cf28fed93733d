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

//! Sortbench core: algorithms, generators, and the algorithm registry.
//!
//! # Modules
//!
//! - `algorithms`: The sorting implementations under measurement
//! - `generators`: Deterministic dataset generators per distribution
//! - `registry`: Immutable table of algorithms with mutation policies
//!   and cost-guards
//!
//! The crate is deliberately free of timing and reporting concerns;
//! those live in the `sortbench` harness crate.

pub mod algorithms;
pub mod generators;
pub mod registry;

pub use algorithms::{insertion_sort, merge_sort, std_sort, std_sorted};
pub use generators::{generate, random, reversed, sorted, Distribution, DEFAULT_SEED};
pub use registry::{default_registry, Algorithm, CopyFn, InPlaceFn, SortKind};
