//! Error types for wire format operations.

use std::fmt;

use buffer::BufferError;

/// Result type for wire format operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors that can occur while encoding or decoding values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// A buffer cursor would cross a boundary.
    Buffer(BufferError),

    /// String exceeds the one-byte length prefix bound.
    StringTooLong {
        /// UTF-8 byte length of the rejected string.
        length: usize,
        /// Maximum encodable byte length.
        max: usize,
    },

    /// Absent values have no wire representation.
    NullNotSupported,

    /// Decoded string bytes are not valid UTF-8.
    InvalidUtf8(std::str::Utf8Error),

    /// Leading varint byte uses a reserved tag.
    ReservedVarintTag {
        /// The reserved tag that was read.
        tag: u8,
    },

    /// Varint value does not fit the target integer width.
    VarIntOutOfRange {
        /// The decoded (sign-folded) value.
        value: u64,
    },

    /// Declared element count does not match the provided values.
    LengthMismatch {
        /// Count declared by the size field.
        expected: usize,
        /// Number of elements actually provided.
        actual: usize,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(e) => write!(f, "buffer error: {e}"),
            Self::StringTooLong { length, max } => {
                write!(f, "string of {length} bytes exceeds the {max} byte limit")
            }
            Self::NullNotSupported => {
                write!(f, "absent value cannot be encoded")
            }
            Self::InvalidUtf8(e) => write!(f, "string bytes are not valid UTF-8: {e}"),
            Self::ReservedVarintTag { tag } => {
                write!(f, "varint tag {tag} is reserved")
            }
            Self::VarIntOutOfRange { value } => {
                write!(f, "varint value {value} does not fit the target width")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "size field declares {expected} elements but {actual} were provided"
                )
            }
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Buffer(e) => Some(e),
            Self::InvalidUtf8(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BufferError> for WireError {
    fn from(err: BufferError) -> Self {
        Self::Buffer(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_string_too_long() {
        let err = WireError::StringTooLong {
            length: 300,
            max: 255,
        };
        let msg = err.to_string();
        assert!(msg.contains("300"), "should mention the rejected length");
        assert!(msg.contains("255"), "should mention the limit");
    }

    #[test]
    fn error_display_reserved_tag() {
        let err = WireError::ReservedVarintTag { tag: 254 };
        let msg = err.to_string();
        assert!(msg.contains("254"));
        assert!(msg.contains("reserved"));
    }

    #[test]
    fn error_display_length_mismatch() {
        let err = WireError::LengthMismatch {
            expected: 3,
            actual: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn error_from_buffer_error() {
        let buf_err = BufferError::Overflow {
            requested: 4,
            free: 0,
        };
        let wire_err: WireError = buf_err.into();
        assert!(matches!(wire_err, WireError::Buffer(_)));
    }

    #[test]
    fn error_source_buffer() {
        let err = WireError::Buffer(BufferError::Underflow {
            requested: 1,
            available: 0,
        });
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_source_none_for_others() {
        let err = WireError::NullNotSupported;
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<WireError>();
    }
}
