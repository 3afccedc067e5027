//! Length-prefixed UTF-8 string formatter.

use buffer::ByteBuffer;

use crate::error::{WireError, WireResult};
use crate::traits::Formatter;

/// Maximum UTF-8 byte length a string may occupy on the wire.
///
/// The length prefix is a single byte, so this bound is structural.
pub const MAX_STRING_BYTES: usize = 255;

/// Formatter for strings: one length-prefix byte, then UTF-8 bytes.
///
/// Absent values are never encoded. The `Option<String>` impl refuses
/// `None` with [`WireError::NullNotSupported`] rather than spending a
/// sentinel on the wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringFormatter;

fn write_str(value: &str, buf: &mut ByteBuffer) -> WireResult<()> {
    let bytes = value.as_bytes();
    if bytes.len() > MAX_STRING_BYTES {
        return Err(WireError::StringTooLong {
            length: bytes.len(),
            max: MAX_STRING_BYTES,
        });
    }
    buf.ensure_free_space(1 + bytes.len())?;
    buf.write_u8_unchecked(bytes.len() as u8);
    buf.write_bytes_unchecked(bytes);
    Ok(())
}

fn read_string(buf: &mut ByteBuffer) -> WireResult<String> {
    // Peek the prefix so a truncated payload leaves the cursor untouched.
    let length = usize::from(buf.peek_u8()?);
    buf.ensure_data(1 + length)?;
    buf.read_u8_unchecked();
    let bytes = buf.read_bytes_unchecked(length);
    let text = std::str::from_utf8(bytes).map_err(WireError::InvalidUtf8)?;
    Ok(text.to_owned())
}

impl Formatter<String> for StringFormatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<String> {
        read_string(buf)
    }

    fn write(&self, value: &String, buf: &mut ByteBuffer) -> WireResult<()> {
        write_str(value, buf)
    }
}

impl Formatter<Option<String>> for StringFormatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<Option<String>> {
        read_string(buf).map(Some)
    }

    fn write(&self, value: &Option<String>, buf: &mut ByteBuffer) -> WireResult<()> {
        match value {
            Some(text) => write_str(text, buf),
            None => Err(WireError::NullNotSupported),
        }
    }
}
