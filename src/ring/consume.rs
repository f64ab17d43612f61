use super::span::{Spans, wrap_add};
use super::{RingBuffer, RingError};

impl RingBuffer<'_> {
    /// Moves up to `out.len()` bytes from the head of the ring into `out`.
    ///
    /// Returns how many bytes were copied, which is less than `out.len()`
    /// when fewer bytes are queued.
    pub fn get(&mut self, out: &mut [u8]) -> Result<usize, RingError> {
        if out.is_empty() {
            return Err(RingError::InvalidArgument {
                reason: "output buffer is empty",
            });
        }
        self.ensure_initialized()?;
        self.ensure_not_empty()?;

        let spans = Spans::ahead(self.read_cursor, out.len().min(self.len()), self.capacity);
        let storage = self.storage.as_deref().ok_or(RingError::NotInitialized)?;
        spans.read_from(storage, out);

        Ok(self.consume(spans.len()))
    }

    /// Drops up to `len` bytes from the head of the ring without copying them.
    ///
    /// Returns how many bytes were dropped.
    pub fn remove(&mut self, len: usize) -> Result<usize, RingError> {
        if len == 0 {
            return Err(RingError::InvalidArgument {
                reason: "nothing to remove",
            });
        }
        self.ensure_initialized()?;
        self.ensure_not_empty()?;

        Ok(self.consume(len.min(self.len())))
    }

    /// Advances the read cursor past `len` queued bytes and re-anchors the
    /// peek cursor on it.
    fn consume(&mut self, len: usize) -> usize {
        self.read_cursor = wrap_add(self.read_cursor, len, self.capacity);
        self.remaining = (self.remaining + len).min(self.capacity);
        self.peek = 0;
        len
    }
}
