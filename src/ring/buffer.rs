use super::RingError;
use super::span::wrap_add;
use core::fmt;

/// A fixed-capacity byte ring over caller-supplied storage.
///
/// The ring never allocates. Storage is lent once through [`RingBuffer::init`]
/// and stays borrowed for the lifetime of the ring, so the caller cannot free
/// or alias it while the ring is in use.
///
/// The occupied region is the circular run from the read cursor to the write
/// cursor. Occupancy is tracked by `remaining` alone; equal cursors mean
/// either empty or full depending on whether `remaining` is `capacity` or 0.
///
/// Besides the append/consume pair (`put`/`get`) the ring supports prepending
/// in front of the read cursor (`insert`) and non-destructive reads through a
/// separate peek cursor (`read`, `lseek`, `reset_offset`).
pub struct RingBuffer<'a> {
    pub(super) storage: Option<&'a mut [u8]>,
    pub(super) capacity: usize,
    pub(super) remaining: usize,
    pub(super) write_cursor: usize,
    pub(super) read_cursor: usize,
    /// Distance of the peek cursor from the read cursor, in `[0, len()]`.
    pub(super) peek: usize,
}

impl Default for RingBuffer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RingBuffer<'a> {
    /// Creates a ring with no storage attached.
    ///
    /// Every operation on it fails with [`RingError::NotInitialized`] until
    /// [`init`](Self::init) succeeds.
    pub const fn new() -> Self {
        Self {
            storage: None,
            capacity: 0,
            remaining: 0,
            write_cursor: 0,
            read_cursor: 0,
            peek: 0,
        }
    }

    /// Creates a ring over the first `capacity` bytes of `storage`.
    pub fn with_storage(storage: &'a mut [u8], capacity: usize) -> Result<Self, RingError> {
        let mut ring = Self::new();
        ring.init(storage, capacity)?;
        Ok(ring)
    }

    /// Attaches `storage[..capacity]` and resets the ring to empty.
    ///
    /// Calling this on an already initialized ring drops the previous storage
    /// and everything queued in it.
    pub fn init(&mut self, storage: &'a mut [u8], capacity: usize) -> Result<(), RingError> {
        if capacity == 0 {
            return Err(RingError::InvalidArgument {
                reason: "capacity must be non-zero",
            });
        }
        if capacity > storage.len() {
            return Err(RingError::InvalidArgument {
                reason: "capacity exceeds the supplied storage",
            });
        }

        self.storage = Some(&mut storage[..capacity]);
        self.capacity = capacity;
        self.remaining = capacity;
        self.write_cursor = 0;
        self.read_cursor = 0;
        self.peek = 0;
        Ok(())
    }

    /// Forgets everything queued. The storage bytes are left untouched.
    pub fn clean(&mut self) -> Result<(), RingError> {
        self.ensure_initialized()?;
        self.write_cursor = 0;
        self.read_cursor = 0;
        self.peek = 0;
        self.remaining = self.capacity;
        Ok(())
    }

    /// Free bytes available to `put`/`insert`; 0 on an uninitialized ring.
    #[inline]
    pub fn remaining(&self) -> usize {
        if self.is_initialized() {
            self.remaining
        } else {
            0
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Occupied bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.capacity - self.remaining
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining == self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.is_initialized() && self.remaining == 0
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.storage.is_some()
    }

    #[inline]
    pub fn read_cursor(&self) -> usize {
        self.read_cursor
    }

    #[inline]
    pub fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    /// Storage offset the next `read` copies from.
    #[inline]
    pub fn peek_cursor(&self) -> usize {
        if self.capacity == 0 {
            return 0;
        }
        wrap_add(self.read_cursor, self.peek, self.capacity)
    }

    /// Distance of the peek cursor past the read cursor.
    #[inline]
    pub fn peek_position(&self) -> usize {
        self.peek
    }

    /// Bytes between the peek cursor and the write cursor.
    #[inline]
    pub fn peekable(&self) -> usize {
        self.len() - self.peek
    }

    #[inline]
    pub(super) fn ensure_initialized(&self) -> Result<(), RingError> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RingError::NotInitialized)
        }
    }

    #[inline]
    pub(super) fn ensure_not_empty(&self) -> Result<(), RingError> {
        if self.is_empty() {
            Err(RingError::Empty)
        } else {
            Ok(())
        }
    }

    /// Checks a write of `len` bytes against the free space.
    #[inline]
    pub(super) fn ensure_space(&self, len: usize) -> Result<(), RingError> {
        if self.remaining == 0 {
            return Err(RingError::Full);
        }
        if self.remaining < len {
            return Err(RingError::InsufficientSpace {
                required: len,
                available: self.remaining,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for RingBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("initialized", &self.is_initialized())
            .field("capacity", &self.capacity)
            .field("remaining", &self.remaining)
            .field("write_cursor", &self.write_cursor)
            .field("read_cursor", &self.read_cursor)
            .field("peek_cursor", &self.peek_cursor())
            .finish()
    }
}
