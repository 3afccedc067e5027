//! Composite layout descriptors and validation for the netval codec.
//!
//! This crate defines the shape of user composite types for the codec:
//! - Field descriptors (scalar, size-field-driven array, fixed array)
//! - Layout validation at construction time
//! - Deterministic layout hashing for peer agreement checks
//!
//! # Design Principles
//!
//! - **Runtime-first** - Layouts are built at runtime; no reflection on
//!   arbitrary Rust types.
//! - **Declaration order is wire order** - Validation enforces what that
//!   ordering implies, most importantly that a size field precedes the
//!   array it sizes.
//! - **Deterministic hashing** - The same layout always hashes the same.

mod error;
mod field;
mod hash;
mod layout;

pub use error::{LayoutError, LayoutResult};
pub use field::{FieldDef, FieldKind};
pub use hash::layout_hash;
pub use layout::{LayoutBuilder, StructLayout};
