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

//! Sorting algorithm implementations.
//!
//! Two classic comparison sorts (insertion, merge) plus two reference
//! entry points into the standard library's stable sort. The classic
//! sorts are copy-based: the caller's slice is never mutated. `std_sort`
//! is the one in-place variant and exists to measure any overhead
//! difference between the copy-producing and mutating call conventions.
//!
//! Every function is total on empty, single-element, already-sorted, and
//! reverse-sorted input.

/// Sorts a slice by insertion sort, returning a new vector.
///
/// Classic O(n²) iterative shift-insert. Stable: equal elements keep
/// their relative input order. The input slice is left unchanged.
///
/// # Arguments
///
/// * `input` - The slice to sort
///
/// # Returns
///
/// A new vector with the same elements in non-decreasing order.
pub fn insertion_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut a = input.to_vec();
    for i in 1..a.len() {
        let key = a[i].clone();
        let mut j = i;
        // Shift strictly greater predecessors right; stopping at equal
        // keys is what makes this stable.
        while j > 0 && a[j - 1] > key {
            a[j] = a[j - 1].clone();
            j -= 1;
        }
        a[j] = key;
    }
    a
}

/// Sorts a slice by merge sort, returning a new vector.
///
/// Classic O(n log n) recursive divide-and-conquer with an
/// auxiliary-array merge. Stable: on equal keys the element from the
/// left half wins. The input slice is left unchanged.
///
/// # Arguments
///
/// * `input` - The slice to sort
///
/// # Returns
///
/// A new vector with the same elements in non-decreasing order.
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }
    let mid = input.len() / 2;
    let left = merge_sort(&input[..mid]);
    let right = merge_sort(&input[mid..]);
    merge(left, right)
}

/// Merges two sorted vectors with a linear two-pointer pass.
///
/// Ties break toward `left`, preserving stability.
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if l <= r {
            out.push(left.next().unwrap());
        } else {
            out.push(right.next().unwrap());
        }
    }
    out.extend(left);
    out.extend(right);
    out
}

/// Reference sort A: the standard library's stable sort through a
/// copy-producing entry point.
///
/// # Arguments
///
/// * `input` - The slice to sort
///
/// # Returns
///
/// A new sorted vector; the input slice is left unchanged.
pub fn std_sorted<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut a = input.to_vec();
    a.sort();
    a
}

/// Reference sort B: the standard library's stable sort through the
/// in-place entry point. Mutates the caller's slice.
pub fn std_sort<T: Ord>(data: &mut [T]) {
    data.sort();
}
