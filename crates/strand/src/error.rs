// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for strand.

use thiserror::Error;

/// Error type for `Strand` operations.
///
/// Every failing operation returns exactly one of these variants and leaves
/// the array in the state it had before the call.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StrandError {
    /// Attempted to create an array with zero initial capacity.
    #[error("Invalid capacity: initial capacity must be at least 1")]
    InvalidCapacity,

    /// A read or insert index fell outside the valid bound.
    ///
    /// For `read` the valid bound is `index < count`; for `insert` it is
    /// `index <= count` (inserting at `count` appends).
    #[error("Index out of range: index {index} with {count} elements")]
    IndexOutOfRange {
        /// The index the caller asked for.
        index: usize,
        /// The number of live elements at the time of the call.
        count: usize,
    },

    /// The value passed to `remove` is not present in the array.
    #[error("Value not found in array")]
    NotFound,
}
