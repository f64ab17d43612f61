use super::span::Spans;
use super::{RingBuffer, RingError};

impl RingBuffer<'_> {
    /// Copies up to `out.len()` bytes starting at the peek cursor, leaving
    /// the ring untouched.
    ///
    /// Returns 0 when the peek cursor already sits on the write cursor.
    pub fn read(&self, out: &mut [u8]) -> Result<usize, RingError> {
        if out.is_empty() {
            return Err(RingError::InvalidArgument {
                reason: "output buffer is empty",
            });
        }
        self.ensure_initialized()?;
        self.ensure_not_empty()?;

        let spans = Spans::ahead(self.peek_cursor(), out.len().min(self.peekable()), self.capacity);
        let storage = self.storage.as_deref().ok_or(RingError::NotInitialized)?;
        spans.read_from(storage, out);
        Ok(spans.len())
    }

    /// Moves the peek cursor by `offset` bytes, positive towards the write
    /// cursor and negative towards the read cursor.
    ///
    /// The cursor is clamped to the occupied region: overshooting either end
    /// leaves it on that end. Returns the new distance from the read cursor.
    pub fn lseek(&mut self, offset: isize) -> Result<usize, RingError> {
        self.ensure_initialized()?;

        self.peek = if offset >= 0 {
            self.peek.saturating_add(offset.unsigned_abs()).min(self.len())
        } else {
            self.peek.saturating_sub(offset.unsigned_abs())
        };
        Ok(self.peek)
    }

    /// Puts the peek cursor back on the read cursor.
    #[inline]
    pub fn reset_offset(&mut self) {
        self.peek = 0;
    }
}
