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

//! Sortbench command-line interface.
//!
//! Runs the full benchmark matrix and writes a Markdown table to
//! stdout. Configuration errors and benchmark failures surface as a
//! diagnostic on stderr and a non-zero exit status; nothing is ever
//! written to disk.

use clap::Parser;
use sortbench::{
    render_table, run_matrix, sort_rows, BenchConfig, DEFAULT_MAX_INSERTION, DEFAULT_REPEATS,
    DEFAULT_SIZES,
};
use sortbench_core::default_registry;
use std::process::ExitCode;

/// Benchmark insertion, merge, and standard-library sorts across
/// random, ascending, and descending input distributions.
#[derive(Parser)]
#[command(name = "sortbench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Comma-separated dataset sizes to benchmark
    #[arg(
        long,
        value_name = "N,N,...",
        value_delimiter = ',',
        default_values_t = DEFAULT_SIZES.iter().copied()
    )]
    sizes: Vec<usize>,

    /// Timed repetitions per benchmark point, reduced via median
    #[arg(long, value_name = "N", default_value_t = DEFAULT_REPEATS)]
    repeats: usize,

    /// Dataset size above which insertion sort is skipped
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_INSERTION)]
    max_insertion: usize,
}

fn run(cli: Cli) -> sortbench::Result<()> {
    let config = BenchConfig::new(&cli.sizes, cli.repeats, cli.max_insertion);
    let registry = default_registry(config.max_insertion);

    let mut rows = run_matrix(&config, &registry)?;
    sort_rows(&mut rows);

    println!("# Sorting benchmark (Markdown)\n");
    println!("{}", render_table(&rows));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
