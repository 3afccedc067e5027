//! Composite layout definitions and validation.

use std::collections::HashSet;

use crate::error::{LayoutError, LayoutResult};
use crate::{FieldDef, FieldKind};

/// The ordered field layout of a composite type.
///
/// Fields serialize in declaration order; validation enforces the size
/// field rules that declaration order implies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructLayout {
    pub type_name: String,
    pub fields: Vec<FieldDef>,
}

impl StructLayout {
    /// Creates a layout from fields after validation.
    pub fn new(type_name: impl Into<String>, fields: Vec<FieldDef>) -> LayoutResult<Self> {
        let layout = Self {
            type_name: type_name.into(),
            fields,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Creates a layout builder.
    #[must_use]
    pub fn builder(type_name: impl Into<String>) -> LayoutBuilder {
        LayoutBuilder {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Returns the declaration index of a field, if present.
    #[must_use]
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Validates layout invariants.
    pub fn validate(&self) -> LayoutResult<()> {
        let mut names = HashSet::new();
        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return Err(LayoutError::DuplicateField {
                    field: field.name.clone(),
                });
            }
        }

        for (index, field) in self.fields.iter().enumerate() {
            if let FieldKind::Array { size_field } = &field.kind {
                let Some(size_index) = self.field_index(size_field) else {
                    return Err(LayoutError::MissingSizeField {
                        field: field.name.clone(),
                        size_field: size_field.clone(),
                    });
                };
                if size_index >= index {
                    return Err(LayoutError::InvalidFieldOrder {
                        field: field.name.clone(),
                        size_field: size_field.clone(),
                    });
                }
                if self.fields[size_index].kind != FieldKind::Scalar {
                    return Err(LayoutError::SizeFieldNotScalar {
                        field: field.name.clone(),
                        size_field: size_field.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Builder for [`StructLayout`].
#[derive(Debug)]
pub struct LayoutBuilder {
    type_name: String,
    fields: Vec<FieldDef>,
}

impl LayoutBuilder {
    /// Adds a field definition.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Builds the layout after validation.
    pub fn build(self) -> LayoutResult<StructLayout> {
        StructLayout::new(self.type_name, self.fields)
    }
}
