//! Growable output buffer with an explicit occupied/capacity split
//!
//! The engine writes directly into the unoccupied tail of a single contiguous
//! allocation, so the buffer tracks "bytes committed" separately from its
//! length instead of relying on a container's automatic resizing.

use log::trace;

use crate::common::{Result, ZflateError};

/// Owned output region the engine fills through per-step window slices
///
/// The buffer is allocated lazily on the first [`arrange`](Self::arrange)
/// call and doubles whenever a previous window was fully consumed, capped at
/// the configured maximum length. Capacity only grows until
/// [`into_bytes`](Self::into_bytes) truncates to the occupied length.
#[derive(Debug)]
pub struct OutputBuffer {
    buf: Vec<u8>,
    occupied: usize,
    initial: usize,
    max_len: usize,
    allocated: bool,
}

impl OutputBuffer {
    /// Create an empty buffer that will allocate `initial` bytes on first use
    /// and never exceed `max_len`
    pub fn new(initial: usize, max_len: usize) -> Self {
        Self {
            buf: Vec::new(),
            occupied: 0,
            // A zero-byte first allocation could never grow out of the
            // doubling formula.
            initial: initial.max(1),
            max_len,
            allocated: false,
        }
    }

    /// Arrange the next writable window
    ///
    /// Grows the buffer when the previous window was completely filled.
    /// Fails with [`ZflateError::BufferLimitExceeded`] once the buffer is at
    /// `max_len` and still full. The returned window is the unoccupied tail,
    /// capped to `max_transfer` bytes.
    pub fn arrange(&mut self, max_transfer: usize) -> Result<&mut [u8]> {
        if !self.allocated {
            self.buf.resize(self.initial.min(self.max_len), 0);
            self.allocated = true;
        } else if self.occupied == self.buf.len() {
            let length = self.buf.len();
            if length >= self.max_len {
                return Err(ZflateError::BufferLimitExceeded(self.max_len));
            }
            // Overflow-safe doubling: compare against half the maximum
            // instead of doubling first.
            let new_length = if length <= self.max_len / 2 {
                length * 2
            } else {
                self.max_len
            };
            self.buf.resize(new_length, 0);
            trace!("output buffer grown to {new_length} bytes");
        }

        let end = self.buf.len().min(self.occupied.saturating_add(max_transfer));
        Ok(&mut self.buf[self.occupied..end])
    }

    /// Record `produced` bytes written into the last arranged window
    pub fn commit(&mut self, produced: usize) {
        self.occupied += produced;
        debug_assert!(self.occupied <= self.buf.len());
    }

    /// Bytes committed so far
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Consume the buffer, truncated to exactly the occupied length
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.buf.truncate(self.occupied);
        self.buf.shrink_to_fit();
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MAX_TRANSFER;

    #[test]
    fn test_lazy_allocation_on_first_arrange() {
        let mut buffer = OutputBuffer::new(16, usize::MAX);
        let window = buffer.arrange(MAX_TRANSFER).unwrap();
        assert_eq!(window.len(), 16);
    }

    #[test]
    fn test_no_growth_while_window_has_room() {
        let mut buffer = OutputBuffer::new(16, usize::MAX);
        buffer.arrange(MAX_TRANSFER).unwrap();
        buffer.commit(10);
        let window = buffer.arrange(MAX_TRANSFER).unwrap();
        // Still the tail of the original allocation.
        assert_eq!(window.len(), 6);
    }

    #[test]
    fn test_doubles_when_window_fully_consumed() {
        let mut buffer = OutputBuffer::new(16, usize::MAX);
        buffer.arrange(MAX_TRANSFER).unwrap();
        buffer.commit(16);
        let window = buffer.arrange(MAX_TRANSFER).unwrap();
        assert_eq!(window.len(), 16); // 32 total, 16 occupied
        buffer.commit(16);
        let window = buffer.arrange(MAX_TRANSFER).unwrap();
        assert_eq!(window.len(), 32); // 64 total, 32 occupied
    }

    #[test]
    fn test_growth_caps_at_max_length() {
        let mut buffer = OutputBuffer::new(16, 24);
        buffer.arrange(MAX_TRANSFER).unwrap();
        buffer.commit(16);
        // 16 > 24 / 2, so the next step lands exactly on the maximum.
        let window = buffer.arrange(MAX_TRANSFER).unwrap();
        assert_eq!(window.len(), 8);
    }

    #[test]
    fn test_full_at_max_length_is_an_error() {
        let mut buffer = OutputBuffer::new(16, 16);
        buffer.arrange(MAX_TRANSFER).unwrap();
        buffer.commit(16);
        match buffer.arrange(MAX_TRANSFER) {
            Err(ZflateError::BufferLimitExceeded(16)) => {}
            other => panic!("expected BufferLimitExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_initial_capacity_clamped_to_max_length() {
        let mut buffer = OutputBuffer::new(1024, 8);
        let window = buffer.arrange(MAX_TRANSFER).unwrap();
        assert_eq!(window.len(), 8);
    }

    #[test]
    fn test_zero_max_length_cannot_arrange_twice() {
        let mut buffer = OutputBuffer::new(16, 0);
        let window = buffer.arrange(MAX_TRANSFER).unwrap();
        assert!(window.is_empty());
        assert!(matches!(
            buffer.arrange(MAX_TRANSFER),
            Err(ZflateError::BufferLimitExceeded(0))
        ));
    }

    #[test]
    fn test_window_capped_to_max_transfer() {
        let mut buffer = OutputBuffer::new(64, usize::MAX);
        let window = buffer.arrange(10).unwrap();
        assert_eq!(window.len(), 10);
        buffer.commit(10);
        let window = buffer.arrange(10).unwrap();
        assert_eq!(window.len(), 10);
    }

    #[test]
    fn test_into_bytes_truncates_to_occupied() {
        let mut buffer = OutputBuffer::new(16, usize::MAX);
        let window = buffer.arrange(MAX_TRANSFER).unwrap();
        window[..5].copy_from_slice(b"hello");
        buffer.commit(5);
        let bytes = buffer.into_bytes();
        assert_eq!(bytes, b"hello");
        assert_eq!(bytes.len(), 5);
    }

    #[test]
    fn test_empty_buffer_yields_empty_bytes() {
        let buffer = OutputBuffer::new(16, usize::MAX);
        assert!(buffer.into_bytes().is_empty());
    }
}
