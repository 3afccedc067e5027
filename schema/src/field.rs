//! Field descriptors for composite layouts.

/// How a field's value maps onto the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// A single value.
    Scalar,

    /// A run of elements whose length lives in an earlier scalar field.
    Array {
        /// Name of the field holding the runtime element count.
        size_field: String,
    },

    /// A run of elements whose length is fixed by the type.
    FixedArray {
        /// Static element count.
        len: usize,
    },
}

/// A field within a composite layout.
///
/// `type_name` records the element type so two peers hashing the same
/// layout agree on more than field names alone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDef {
    pub name: String,
    pub type_name: String,
    pub kind: FieldKind,
}

impl FieldDef {
    /// Creates a scalar field definition.
    #[must_use]
    pub fn scalar(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind: FieldKind::Scalar,
        }
    }

    /// Creates an array field sized by an earlier scalar field.
    #[must_use]
    pub fn array(
        name: impl Into<String>,
        type_name: impl Into<String>,
        size_field: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind: FieldKind::Array {
                size_field: size_field.into(),
            },
        }
    }

    /// Creates a fixed-length array field.
    #[must_use]
    pub fn fixed_array(name: impl Into<String>, type_name: impl Into<String>, len: usize) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind: FieldKind::FixedArray { len },
        }
    }
}
