//! Fixed-capacity message buffer for the netval codec.
//!
//! This crate provides [`ByteBuffer`], the byte container every other
//! netval crate encodes into and decodes from. A buffer is allocated once
//! per message at a fixed capacity and never grows; all transfers are
//! bounds-checked against the write cursor (`size`) and read cursor
//! (`pos`).
//!
//! # Design Principles
//!
//! - **No unsafe code** - Unchecked fast paths are plain slice accesses.
//! - **No reallocation** - Capacity is a hard ceiling, never a growth hint.
//! - **Amortized checks** - Batch callers assert once, then use the
//!   unchecked transfers.
//! - **Explicit errors** - Boundary violations return structured errors.
//!
//! # Example
//!
//! ```
//! use buffer::ByteBuffer;
//!
//! let mut buf = ByteBuffer::default();
//! buf.write_u8(42).unwrap();
//!
//! buf.rewind();
//! assert_eq!(buf.read_u8().unwrap(), 42);
//! ```

mod byte_buffer;
mod error;

pub use byte_buffer::{ByteBuffer, DEFAULT_CAPACITY};
pub use error::{BufferError, BufferResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctest_example() {
        let mut buf = ByteBuffer::default();
        buf.write_u8(42).unwrap();

        buf.rewind();
        assert_eq!(buf.read_u8().unwrap(), 42);
    }

    #[test]
    fn encode_decode_cycle() {
        let mut buf = ByteBuffer::new(16);
        buf.write_array_unchecked([1u8, 2, 3]);
        buf.rewind();
        assert_eq!(buf.read_array_unchecked::<3>(), [1, 2, 3]);
        assert_eq!(buf.remaining_data(), 0);
    }
}
