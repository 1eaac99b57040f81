// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::StrandError;

/// A growable, indexable array of owned strings.
///
/// The backing store always holds exactly `capacity` slots. Slots
/// `[0, count)` hold live elements; slots `[count, capacity)` are empty
/// placeholders. When a write would exceed capacity, the store grows to
/// exactly twice its current size and the live elements move across in
/// order (ownership transfer, no string duplication).
///
/// Every element is an independent owned copy of what the caller passed
/// in. Failing operations leave the array untouched.
///
/// # Example
///
/// ```rust
/// use strand::Strand;
///
/// let mut arr = Strand::with_capacity(4).unwrap();
/// arr.append("x");
/// arr.append("y");
/// arr.insert("w", 1).unwrap();
///
/// assert_eq!(format!("{arr}"), "[x,w,y]");
/// ```
#[derive(Clone)]
pub struct Strand {
    slots: Vec<Option<String>>,
    count: usize,
}

impl core::fmt::Debug for Strand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Strand")
            .field("count", &self.count)
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl Strand {
    /// Creates a new empty array with the given initial capacity.
    ///
    /// All slots start empty. Fails with [`StrandError::InvalidCapacity`]
    /// when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, StrandError> {
        if capacity == 0 {
            return Err(StrandError::InvalidCapacity);
        }

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Ok(Self { slots, count: 0 })
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the total number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Doubles the backing store.
    ///
    /// # Growth Strategy
    ///
    /// 1. Allocate a fresh store of exactly `2 * capacity` empty slots
    /// 2. Move the `count` live elements across in order
    /// 3. Replace the old store (its strings moved out, not copied)
    ///
    /// The growth factor is always exactly 2, so the amortized cost of
    /// repeated appends stays O(1) and capacities remain predictable
    /// multiples of what the caller chose at creation.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let new_capacity = self.capacity() * 2;

        let mut new_slots = Vec::with_capacity(new_capacity);
        new_slots.resize_with(new_capacity, || None);

        for (new_slot, old_slot) in new_slots.iter_mut().zip(self.slots[..self.count].iter_mut()) {
            *new_slot = old_slot.take();
        }

        self.slots = new_slots;
    }

    /// Returns the element at `index`.
    ///
    /// The returned slice borrows from the array; the array keeps ownership
    /// of the stored string. Fails with [`StrandError::IndexOutOfRange`]
    /// when `index >= len()`. Never grows the store.
    pub fn read(&self, index: usize) -> Result<&str, StrandError> {
        if index >= self.count {
            return Err(StrandError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }

        // Live-prefix invariant: slots below count always hold a value.
        debug_assert!(self.slots[index].is_some());
        Ok(self.slots[index].as_deref().unwrap_or_default())
    }

    /// Inserts a copy of `value` at `index`, shifting `[index, len())` one
    /// slot to the right.
    ///
    /// `index == len()` appends at the end. Fails with
    /// [`StrandError::IndexOutOfRange`] when `index > len()`, before any
    /// mutation. If the array is full, the store doubles first.
    pub fn insert(&mut self, value: &str, index: usize) -> Result<(), StrandError> {
        if index > self.count {
            return Err(StrandError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }

        if self.count == self.capacity() {
            self.grow();
        }

        // Shift tail-first so no live slot is overwritten before it moves.
        for i in (index..self.count).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }

        self.slots[index] = Some(String::from(value));
        self.count += 1;

        Ok(())
    }

    /// Appends a copy of `value` at the end of the array.
    ///
    /// Equivalent to inserting at `len()`. Growth happens transparently;
    /// the write always completes.
    pub fn append(&mut self, value: &str) {
        if self.count == self.capacity() {
            self.grow();
        }

        self.slots[self.count] = Some(String::from(value));
        self.count += 1;
    }

    /// Removes the first element equal to `value`, shifting everything
    /// after it one slot to the left.
    ///
    /// Later duplicates are untouched. Fails with [`StrandError::NotFound`]
    /// when no element matches, leaving the array unchanged. Never shrinks
    /// the store.
    pub fn remove(&mut self, value: &str) -> Result<(), StrandError> {
        let found = self.slots[..self.count]
            .iter()
            .position(|slot| slot.as_deref() == Some(value))
            .ok_or(StrandError::NotFound)?;

        // Drop the match, then close the gap head-to-tail. The final take()
        // leaves the now-unused trailing slot empty.
        self.slots[found] = None;
        for i in found + 1..self.count {
            self.slots[i - 1] = self.slots[i].take();
        }

        self.count -= 1;

        Ok(())
    }

    /// Returns an iterator over the live elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots[..self.count]
            .iter()
            .filter_map(|slot| slot.as_deref())
    }
}

/// Renders the live elements as `[a,b,c]`.
///
/// Pure observer; matches the console format of the demonstration driver.
impl core::fmt::Display for Strand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("[")?;

        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(element)?;
        }

        f.write_str("]")
    }
}

/// Equality over the live prefix; spare slots don't participate.
impl PartialEq for Strand {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Eq for Strand {}
