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

//! Result rows and report rendering.
//!
//! Rendering is a pure function of the rows: identical row sets produce
//! byte-identical output, and rows are expected to be sorted by
//! [`sort_rows`] first so reports stay diffable across runs.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sortbench_core::Distribution;

/// Fixed table header.
pub const HEADERS: [&str; 4] = ["case", "n", "algorithm", "time_s_median"];

/// One algorithm's median duration on one dataset.
///
/// Rows are append-only: created once per valid
/// (distribution, size, algorithm) combination and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Input distribution the dataset was generated from.
    pub distribution: Distribution,
    /// Dataset length.
    pub n: usize,
    /// Algorithm display name.
    pub algorithm: String,
    /// Median wall-clock duration in seconds.
    pub median_secs: f64,
}

impl ResultRow {
    /// Creates a new result row.
    pub fn new(
        distribution: Distribution,
        n: usize,
        algorithm: impl Into<String>,
        median_secs: f64,
    ) -> Self {
        Self {
            distribution,
            n,
            algorithm: algorithm.into(),
            median_secs,
        }
    }
}

/// Sorts rows by `(distribution, n, algorithm)`.
///
/// This ordering is a required property of the report, not an
/// incidental one.
pub fn sort_rows(rows: &mut [ResultRow]) {
    rows.sort_by(|a, b| {
        (a.distribution.as_str(), a.n, a.algorithm.as_str())
            .cmp(&(b.distribution.as_str(), b.n, b.algorithm.as_str()))
    });
}

/// Renders rows as a fixed-width Markdown-style table.
///
/// Median cells use exactly 6 decimal places; every other cell uses its
/// natural string form. Each column is padded to the maximum rendered
/// width of its header or any cell, and the separator row repeats the
/// same widths in dashes. Does not sort: callers order rows first.
pub fn render_table(rows: &[ResultRow]) -> String {
    let rendered: Vec<[String; 4]> = rows.iter().map(render_cells).collect();

    let mut widths: [usize; 4] = [0; 4];
    for (width, header) in widths.iter_mut().zip(HEADERS) {
        *width = header.len();
    }
    for cells in &rendered {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.len());
        }
    }

    let format_row = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell))
            .collect();
        format!("| {} |", padded.join(" | "))
    };

    let header_cells: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let separator = format!(
        "|-{}-|",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-|-")
    );

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&header_cells));
    lines.push(separator);
    for cells in &rendered {
        lines.push(format_row(cells));
    }
    lines.join("\n")
}

fn render_cells(row: &ResultRow) -> [String; 4] {
    [
        row.distribution.to_string(),
        row.n.to_string(),
        row.algorithm.clone(),
        format!("{:.6}", row.median_secs),
    ]
}

/// Renders rows as pretty-printed JSON for machine consumption.
pub fn render_json(rows: &[ResultRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(distribution: Distribution, n: usize, algorithm: &str, secs: f64) -> ResultRow {
        ResultRow::new(distribution, n, algorithm, secs)
    }

    #[test]
    fn test_sort_rows_orders_by_distribution_then_size_then_name() {
        let mut rows = vec![
            row(Distribution::Sorted, 100, "Merge", 0.001),
            row(Distribution::Random, 50, "Insertion", 0.002),
            row(Distribution::Random, 50, "Merge", 0.003),
            row(Distribution::Random, 20, "Merge", 0.004),
        ];
        sort_rows(&mut rows);

        let keys: Vec<(&str, usize, &str)> = rows
            .iter()
            .map(|r| (r.distribution.as_str(), r.n, r.algorithm.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("random", 20, "Merge"),
                ("random", 50, "Insertion"),
                ("random", 50, "Merge"),
                ("sorted", 100, "Merge"),
            ]
        );
    }

    #[test]
    fn test_random_sorts_before_sorted() {
        let mut rows = vec![
            row(Distribution::Sorted, 100, "Merge", 0.001),
            row(Distribution::Random, 50, "Insertion", 0.002),
        ];
        sort_rows(&mut rows);
        assert_eq!(rows[0].distribution, Distribution::Random);
    }

    #[test]
    fn test_render_table_fixed_decimals() {
        let table = render_table(&[row(Distribution::Random, 10, "Merge", 0.5)]);
        assert!(table.contains("0.500000"));
    }

    #[test]
    fn test_render_table_uniform_row_widths() {
        let rows = vec![
            row(Distribution::Random, 1_000, "Insertion", 0.123456),
            row(Distribution::Reversed, 5, "Std sorted", 12.0),
        ];
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        // Header + separator + one line per row, all the same total width.
        assert_eq!(lines.len(), rows.len() + 2);
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn test_render_table_header_and_separator() {
        let table = render_table(&[row(Distribution::Sorted, 1, "Merge", 0.0)]);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("| case"));
        assert!(lines[0].contains("time_s_median"));
        assert!(lines[1].starts_with("|-"));
        assert!(lines[1].ends_with("-|"));
        assert!(lines[1].chars().all(|c| c == '|' || c == '-'));
    }

    #[test]
    fn test_render_table_is_deterministic() {
        let rows = vec![
            row(Distribution::Random, 50, "Merge", 0.25),
            row(Distribution::Reversed, 50, "Std sort", 0.125),
        ];
        assert_eq!(render_table(&rows), render_table(&rows));
    }

    #[test]
    fn test_render_table_empty_rows() {
        let table = render_table(&[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("case"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let rows = vec![row(Distribution::Random, 50, "Merge", 0.25)];
        let json = render_json(&rows).unwrap();
        let parsed: Vec<ResultRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rows);
    }
}
