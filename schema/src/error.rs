//! Layout validation errors.

use std::fmt;

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors that can occur when building or validating a composite layout.
///
/// All of these are construction-time schema mistakes; a layout that
/// validates never fails for these reasons at encode/decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Two fields share a name.
    DuplicateField {
        /// The repeated field name.
        field: String,
    },

    /// An array names a size field that does not exist.
    MissingSizeField {
        /// The array field.
        field: String,
        /// The size field it referenced.
        size_field: String,
    },

    /// An array names a size field declared at or after the array itself.
    ///
    /// Fields serialize in declaration order, so a size field must be
    /// decoded before the array it sizes.
    InvalidFieldOrder {
        /// The array field.
        field: String,
        /// The late size field.
        size_field: String,
    },

    /// An array names a size field that is not a scalar.
    SizeFieldNotScalar {
        /// The array field.
        field: String,
        /// The non-scalar size field.
        size_field: String,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateField { field } => {
                write!(f, "duplicate field `{field}`")
            }
            Self::MissingSizeField { field, size_field } => {
                write!(f, "array `{field}` references missing size field `{size_field}`")
            }
            Self::InvalidFieldOrder { field, size_field } => {
                write!(
                    f,
                    "size field `{size_field}` must be declared before array `{field}`"
                )
            }
            Self::SizeFieldNotScalar { field, size_field } => {
                write!(
                    f,
                    "size field `{size_field}` of array `{field}` must be a scalar"
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}
