use super::span::{Spans, wrap_add};
use super::{RingBuffer, RingError};

impl RingBuffer<'_> {
    /// Appends `data` at the write cursor.
    ///
    /// The write is all-or-nothing: when `data` does not fit the ring is left
    /// untouched.
    pub fn put(&mut self, data: &[u8]) -> Result<(), RingError> {
        self.check_write(data)?;

        let spans = Spans::ahead(self.write_cursor, data.len(), self.capacity);
        self.copy_in(&spans, data)?;

        self.write_cursor = wrap_add(spans.start(), spans.len(), self.capacity);
        self.remaining = self.remaining.saturating_sub(spans.len());
        Ok(())
    }

    /// Prepends `data` right before the read cursor, so the next `get`
    /// returns it ahead of anything already queued.
    ///
    /// Moves the read cursor back by `data.len()` and resets the peek cursor
    /// onto it.
    pub fn insert(&mut self, data: &[u8]) -> Result<(), RingError> {
        self.check_write(data)?;

        let spans = Spans::behind(self.read_cursor, data.len(), self.capacity);
        self.copy_in(&spans, data)?;

        self.read_cursor = spans.start();
        self.peek = 0;
        self.remaining = self.remaining.saturating_sub(spans.len());
        Ok(())
    }

    fn check_write(&self, data: &[u8]) -> Result<(), RingError> {
        if data.is_empty() {
            return Err(RingError::InvalidArgument {
                reason: "nothing to write",
            });
        }
        self.ensure_initialized()?;
        self.ensure_space(data.len())
    }

    fn copy_in(&mut self, spans: &Spans, data: &[u8]) -> Result<(), RingError> {
        let storage = self.storage.as_deref_mut().ok_or(RingError::NotInitialized)?;
        spans.write_into(storage, data);
        Ok(())
    }
}
