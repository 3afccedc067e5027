//! Error types for buffer operations.

use std::fmt;

/// Result type for buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors raised when a cursor would cross a buffer boundary.
///
/// Both variants indicate a schema or peer mismatch, not a recoverable
/// runtime condition: the caller must discard the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to write past the fixed capacity.
    Overflow {
        /// Number of bytes the write needed.
        requested: usize,
        /// Number of bytes still free before capacity.
        free: usize,
    },

    /// Attempted to read past the written data.
    Underflow {
        /// Number of bytes the read needed.
        requested: usize,
        /// Number of bytes remaining between `pos` and `size`.
        available: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { requested, free } => {
                write!(
                    f,
                    "attempted to write {requested} bytes but only {free} bytes free"
                )
            }
            Self::Underflow {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}
