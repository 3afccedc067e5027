//! Deterministic layout hashing.

use blake3::Hasher;

use crate::{FieldKind, StructLayout};

/// Computes a deterministic hash for layout agreement checks.
///
/// Two peers that disagree on a composite's field order, names, kinds, or
/// element types produce different hashes, which is enough to reject a
/// mismatched schema before decoding garbage.
#[must_use]
pub fn layout_hash(layout: &StructLayout) -> u64 {
    let mut hasher = Hasher::new();
    write_str(&mut hasher, &layout.type_name);
    write_u32(&mut hasher, layout.fields.len() as u32);

    for field in &layout.fields {
        write_str(&mut hasher, &field.name);
        write_str(&mut hasher, &field.type_name);
        write_kind(&mut hasher, &field.kind);
    }

    let hash = hasher.finalize();
    let bytes = hash.as_bytes();
    u64::from_le_bytes(bytes[0..8].try_into().unwrap())
}

fn write_kind(hasher: &mut Hasher, kind: &FieldKind) {
    match kind {
        FieldKind::Scalar => {
            write_u8(hasher, 0);
        }
        FieldKind::Array { size_field } => {
            write_u8(hasher, 1);
            write_str(hasher, size_field);
        }
        FieldKind::FixedArray { len } => {
            write_u8(hasher, 2);
            write_u32(hasher, *len as u32);
        }
    }
}

fn write_u8(hasher: &mut Hasher, value: u8) {
    hasher.update(&[value]);
}

fn write_u32(hasher: &mut Hasher, value: u32) {
    hasher.update(&value.to_le_bytes());
}

fn write_str(hasher: &mut Hasher, value: &str) {
    // Length prefix keeps adjacent strings from colliding.
    write_u32(hasher, value.len() as u32);
    hasher.update(value.as_bytes());
}
