//! Splitting a circular byte run into contiguous copy ranges.
//!
//! Every transfer in and out of the ring covers at most two contiguous
//! ranges of the backing storage: one running from the starting offset
//! towards the physical end, and, when the run crosses that end, a second
//! one starting at offset 0. Writes, reads and prepends all go through
//! [`Spans::split`] so the wraparound arithmetic lives in one place.

use core::ops::Range;

#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}

/// Which side of the cursor the run occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The run starts at the cursor and grows towards the tail.
    Ahead,
    /// The run ends right before the cursor and grows towards the head.
    Behind,
}

/// Up to two storage ranges that, concatenated, hold one logical run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spans {
    pub first: Range<usize>,
    pub second: Range<usize>,
}

impl Spans {
    /// Splits a run of `len` bytes adjacent to `cursor`.
    ///
    /// `len` must already be validated against the free or occupied byte
    /// count, so it never exceeds `capacity`.
    pub fn split(cursor: usize, len: usize, capacity: usize, direction: Direction) -> Self {
        debug_assert!(capacity > 0);
        debug_assert!(cursor < capacity);
        debug_assert!(len <= capacity);

        let start = match direction {
            Direction::Ahead => cursor,
            Direction::Behind => wrap_sub(cursor, len, capacity),
        };

        // run crosses the end of storage
        //
        //              S . .
        //   [B B _ _ _ A A A]
        //    . .
        let first_len = len.min(capacity - start);
        Self {
            first: start..start + first_len,
            second: 0..len - first_len,
        }
    }

    #[inline]
    pub fn ahead(cursor: usize, len: usize, capacity: usize) -> Self {
        Self::split(cursor, len, capacity, Direction::Ahead)
    }

    #[inline]
    pub fn behind(cursor: usize, len: usize, capacity: usize) -> Self {
        Self::split(cursor, len, capacity, Direction::Behind)
    }

    /// Storage offset of the first byte of the run.
    #[inline]
    pub fn start(&self) -> usize {
        self.first.start
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the run crosses the physical end of the storage.
    #[inline]
    pub fn wraps(&self) -> bool {
        !self.second.is_empty()
    }

    /// Copies `data` into the storage ranges, in order.
    pub fn write_into(&self, storage: &mut [u8], data: &[u8]) {
        debug_assert_eq!(data.len(), self.len());
        let (head, tail) = data.split_at(self.first.len());
        storage[self.first.clone()].copy_from_slice(head);
        storage[self.second.clone()].copy_from_slice(tail);
    }

    /// Copies the storage ranges into the front of `out`.
    pub fn read_from(&self, storage: &[u8], out: &mut [u8]) {
        debug_assert!(out.len() >= self.len());
        let split = self.first.len();
        out[..split].copy_from_slice(&storage[self.first.clone()]);
        out[split..self.len()].copy_from_slice(&storage[self.second.clone()]);
    }
}
