//! Value formatters and codec contracts for the netval codec.
//!
//! This crate defines how individual values cross the wire:
//! - The [`Codec`] and [`Formatter`] contracts every serializable type
//!   satisfies
//! - Fixed-width big-endian formatters for booleans, integers, and floats
//! - Variable-length integer formatters that spend bytes proportional to
//!   magnitude
//! - A bounded, length-prefixed UTF-8 string formatter
//! - Batch array transfer with a single amortized bounds check
//!
//! # Design Principles
//!
//! - **Stateless formatters** - All mutable state lives in the caller's
//!   [`ByteBuffer`].
//! - **Check once, transfer raw** - Checked entry points assert exactly
//!   the bytes they need, then use the unchecked fast path; batch calls
//!   hoist one assertion above the loop.
//! - **Explicit errors** - Boundary and value violations return structured
//!   errors, never panic.
//!
//! # Example
//!
//! ```
//! use buffer::ByteBuffer;
//! use wire::{Formatter, VarU32Formatter};
//!
//! let mut buf = ByteBuffer::default();
//! VarU32Formatter.write(&42, &mut buf).unwrap();
//! assert_eq!(buf.size(), 1);
//!
//! buf.rewind();
//! assert_eq!(VarU32Formatter.read(&mut buf).unwrap(), 42);
//! ```

mod error;
mod primitive;
mod string;
mod traits;
mod varint;

pub use buffer::{ByteBuffer, BufferError, BufferResult};
pub use error::{WireError, WireResult};
pub use primitive::{
    BoolFormatter, F32Formatter, F64Formatter, I16Formatter, I32Formatter, I64Formatter,
    I8Formatter, U16Formatter, U32Formatter, U64Formatter, U8Formatter,
};
pub use string::{StringFormatter, MAX_STRING_BYTES};
pub use traits::{Codec, FixedFormatter, Formatter};
pub use varint::{
    encoded_len, signed_encoded_len, VarI32Formatter, VarI64Formatter, VarU32Formatter,
    VarU64Formatter,
};
