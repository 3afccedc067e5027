//! Fixed-capacity byte container with explicit cursors.

use crate::error::{BufferError, BufferResult};

/// Default capacity in bytes, the maximum single message payload of the
/// protocol.
pub const DEFAULT_CAPACITY: usize = 255;

/// A fixed-capacity byte buffer with a write cursor and a read cursor.
///
/// `size` counts the bytes written so far and `pos` is the read cursor;
/// the invariant `pos <= size <= capacity` holds at all times. Capacity is
/// fixed at construction and the buffer never reallocates: exceeding it is
/// a schema error surfaced as [`BufferError::Overflow`], not a signal to
/// grow.
///
/// The `*_unchecked` methods skip the boundary assertion and must only be
/// called after a matching [`ensure_free_space`](Self::ensure_free_space)
/// or [`ensure_data`](Self::ensure_data). They are plain slice accesses,
/// so a violated contract panics rather than corrupting memory.
#[derive(Debug, Clone)]
pub struct ByteBuffer {
    data: Box<[u8]>,
    size: usize,
    pos: usize,
}

impl ByteBuffer {
    /// Creates an empty buffer with the given fixed capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            size: 0,
            pos: 0,
        }
    }

    /// Returns the fixed capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the read cursor position.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes still free before capacity.
    #[must_use]
    pub fn free_space(&self) -> usize {
        self.capacity() - self.size
    }

    /// Returns the number of written bytes not yet read.
    #[must_use]
    pub const fn remaining_data(&self) -> usize {
        self.size - self.pos
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Resets both cursors, discarding the written bytes.
    ///
    /// The read cursor is reset together with `size`; leaving it behind
    /// would break the `pos <= size` invariant.
    pub fn clear(&mut self) {
        self.size = 0;
        self.pos = 0;
    }

    /// Resets the read cursor to the start of the written bytes.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Fails with [`BufferError::Overflow`] unless `requested` bytes fit
    /// before capacity.
    pub fn ensure_free_space(&self, requested: usize) -> BufferResult<()> {
        let free = self.free_space();
        if requested > free {
            return Err(BufferError::Overflow { requested, free });
        }
        Ok(())
    }

    /// Fails with [`BufferError::Underflow`] unless `requested` bytes
    /// remain between `pos` and `size`.
    pub fn ensure_data(&self, requested: usize) -> BufferResult<()> {
        let available = self.remaining_data();
        if requested > available {
            return Err(BufferError::Underflow {
                requested,
                available,
            });
        }
        Ok(())
    }

    /// Appends a byte without a boundary assertion.
    pub fn write_u8_unchecked(&mut self, value: u8) {
        self.data[self.size] = value;
        self.size += 1;
    }

    /// Appends a slice without a boundary assertion.
    pub fn write_bytes_unchecked(&mut self, bytes: &[u8]) {
        let end = self.size + bytes.len();
        self.data[self.size..end].copy_from_slice(bytes);
        self.size = end;
    }

    /// Appends a fixed-size array without a boundary assertion.
    pub fn write_array_unchecked<const N: usize>(&mut self, bytes: [u8; N]) {
        self.write_bytes_unchecked(&bytes);
    }

    /// Consumes a byte without a boundary assertion.
    pub fn read_u8_unchecked(&mut self) -> u8 {
        let value = self.data[self.pos];
        self.pos += 1;
        value
    }

    /// Consumes `len` bytes without a boundary assertion.
    pub fn read_bytes_unchecked(&mut self, len: usize) -> &[u8] {
        let start = self.pos;
        self.pos += len;
        &self.data[start..self.pos]
    }

    /// Consumes a fixed-size array without a boundary assertion.
    pub fn read_array_unchecked<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes_unchecked(N));
        out
    }

    /// Appends a byte after checking for free space.
    pub fn write_u8(&mut self, value: u8) -> BufferResult<()> {
        self.ensure_free_space(1)?;
        self.write_u8_unchecked(value);
        Ok(())
    }

    /// Consumes a byte after checking for remaining data.
    pub fn read_u8(&mut self) -> BufferResult<u8> {
        self.ensure_data(1)?;
        Ok(self.read_u8_unchecked())
    }

    /// Returns the next readable byte without consuming it.
    ///
    /// Length-prefixed and tagged decoders peek first so that a failed
    /// decode leaves the read cursor where it was.
    pub fn peek_u8(&self) -> BufferResult<u8> {
        self.ensure_data(1)?;
        Ok(self.data[self.pos])
    }

    /// Replaces the buffer contents with an incoming payload.
    ///
    /// Sets `size` to the payload length and rewinds the read cursor, the
    /// state a decode pass expects when the transport hands over a
    /// received message.
    pub fn load(&mut self, payload: &[u8]) -> BufferResult<()> {
        if payload.len() > self.capacity() {
            return Err(BufferError::Overflow {
                requested: payload.len(),
                free: self.capacity(),
            });
        }
        self.data[..payload.len()].copy_from_slice(payload);
        self.size = payload.len();
        self.pos = 0;
        Ok(())
    }

    /// Returns the written bytes, the view the transport sends.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.data[..self.size]
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
