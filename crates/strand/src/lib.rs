// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable, indexable array of owned strings.
//!
//! `Strand` is a dynamic array with explicit capacity bookkeeping: a backing
//! store of `capacity` slots, of which the first `count` hold live owned
//! strings. The store doubles in place when a write would exceed capacity,
//! and insert/remove shift the affected suffix one slot to keep elements
//! contiguous.
//!
//! # Core Guarantees
//!
//! - **Explicit capacity**: creation takes a nonzero initial capacity; growth
//!   always allocates exactly twice the current capacity, so amortized cost
//!   is predictable.
//! - **Owned copies**: every stored element is an independent copy. Callers
//!   keep ownership of the `&str` they pass in.
//! - **All-or-nothing operations**: a failed `read`, `insert`, or `remove`
//!   leaves the array untouched. There are no partial shifts.
//!
//! # Example
//!
//! ```rust
//! use strand::{Strand, StrandError};
//!
//! fn example() -> Result<(), StrandError> {
//!     let mut arr = Strand::with_capacity(2)?;
//!
//!     arr.append("a");
//!     arr.append("b");
//!
//!     // Capacity is exhausted; the next write doubles it transparently.
//!     arr.append("c");
//!     assert_eq!(arr.capacity(), 4);
//!
//!     arr.insert("w", 1)?;
//!     assert_eq!(arr.read(1)?, "w");
//!
//!     arr.remove("b")?;
//!     assert_eq!(format!("{arr}"), "[a,w,c]");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Failure Leaves State Intact
//!
//! ```rust
//! use strand::{Strand, StrandError};
//!
//! fn example() -> Result<(), StrandError> {
//!     let mut arr = Strand::with_capacity(4)?;
//!     arr.append("only");
//!
//!     assert!(matches!(
//!         arr.insert("x", 5),
//!         Err(StrandError::IndexOutOfRange { index: 5, count: 1 })
//!     ));
//!     assert!(matches!(arr.remove("missing"), Err(StrandError::NotFound)));
//!
//!     // Both failures were observed without mutating the array.
//!     assert_eq!(arr.len(), 1);
//!     assert_eq!(arr.read(0)?, "only");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod array;
mod error;

pub use array::Strand;
pub use error::StrandError;
