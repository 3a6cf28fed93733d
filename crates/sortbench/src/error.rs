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

//! Structured error types for the benchmark harness.
//!
//! All failures propagate to the process boundary. There is no
//! partial-result salvage or retry: the harness assumes a controlled,
//! correctness-verified set of algorithms, so a failure is a programmer
//! error worth stopping for.

use thiserror::Error;

/// Maximum dataset size accepted by the harness (10 million elements).
///
/// Bounds memory use from unreasonably large size requests; benchmarks
/// at this scale stop saying anything a smaller run would not.
pub const MAX_DATASET_SIZE: usize = 10_000_000;

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while configuring or running a benchmark.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// A configuration parameter failed validation.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A requested dataset size exceeds [`MAX_DATASET_SIZE`].
    #[error("Dataset size {requested} exceeds maximum allowed limit of {max}")]
    DatasetTooLarge {
        /// Requested size
        requested: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Serializing results to JSON failed.
    #[error("JSON export error: {0}")]
    Json(String),
}

impl BenchError {
    /// Creates an invalid-configuration error.
    ///
    /// # Arguments
    ///
    /// * `parameter` - The offending parameter name
    /// * `reason` - Why the value was rejected
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source.to_string())
    }
}

/// Validates that a dataset size is within the harness limit.
#[inline]
pub fn validate_dataset_size(size: usize) -> Result<()> {
    if size > MAX_DATASET_SIZE {
        Err(BenchError::DatasetTooLarge {
            requested: size,
            max: MAX_DATASET_SIZE,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = BenchError::invalid_config("repeats", "must be at least 1");
        let msg = err.to_string();
        assert!(msg.contains("repeats"));
        assert!(msg.contains("must be at least 1"));
    }

    #[test]
    fn test_validate_dataset_size() {
        assert!(validate_dataset_size(0).is_ok());
        assert!(validate_dataset_size(MAX_DATASET_SIZE).is_ok());

        let result = validate_dataset_size(MAX_DATASET_SIZE + 1);
        assert_eq!(
            result,
            Err(BenchError::DatasetTooLarge {
                requested: MAX_DATASET_SIZE + 1,
                max: MAX_DATASET_SIZE,
            })
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: BenchError = json_err.into();
        assert!(matches!(err, BenchError::Json(_)));
    }
}
