//! Composite value codecs for the netval codec.
//!
//! This is the main crate tying together buffer, wire, schema, and
//! registry to move whole game-state values across a fixed-capacity
//! buffer:
//!
//! - [`CompositeCodec`] serializes user aggregate types field by field
//! - Field codecs are resolved through the [`CodecRegistry`] when the
//!   composite is constructed, so nested and mutually referential value
//!   types work regardless of registration order
//! - Size-field-driven arrays and fixed arrays ride the batch transfer
//!   path of formatter-backed element types
//!
//! # Design Principles
//!
//! - **Correctness first** - Layout mistakes fail at construction, not on
//!   the wire.
//! - **No steady-state allocations** - Encoding writes into the caller's
//!   buffer; only decode of dynamic data allocates.
//! - **Deterministic** - Same registry inputs produce the same registry;
//!   same values produce the same bytes.
//!
//! # Example
//!
//! ```
//! use codec::{Codec, CompositeCodec, ByteBuffer, RegistryBuilder};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Player {
//!     score: u32,
//!     name: String,
//! }
//!
//! let mut builder = RegistryBuilder::standard();
//! builder.register::<Player, _, _>(|registry| {
//!     CompositeCodec::builder("Player", registry)
//!         .scalar("score", |p: &Player| &p.score, |p: &mut Player| &mut p.score)?
//!         .scalar("name", |p: &Player| &p.name, |p: &mut Player| &mut p.name)?
//!         .build()
//! });
//! let registry = builder.build().unwrap();
//!
//! let player = Player { score: 42, name: "kd".to_owned() };
//! let codec = registry.get::<Player>().unwrap();
//!
//! let mut buf = ByteBuffer::default();
//! codec.encode(&player, &mut buf).unwrap();
//!
//! buf.rewind();
//! let mut decoded = Player::default();
//! codec.decode(&mut buf, &mut decoded).unwrap();
//! assert_eq!(decoded, player);
//! ```

mod composite;

pub use composite::{CompositeBuilder, CompositeCodec};

pub use buffer::{ByteBuffer, BufferError, BufferResult, DEFAULT_CAPACITY};
pub use registry::{CodecRegistry, FactorySet, RegistryBuilder, RegistryError, RegistryResult};
pub use schema::{layout_hash, FieldDef, FieldKind, LayoutError, StructLayout};
pub use wire::{
    encoded_len, signed_encoded_len, BoolFormatter, Codec, F32Formatter, F64Formatter,
    FixedFormatter, Formatter, I16Formatter, I32Formatter, I64Formatter, I8Formatter,
    StringFormatter, U16Formatter, U32Formatter, U64Formatter, U8Formatter, VarI32Formatter,
    VarI64Formatter, VarU32Formatter, VarU64Formatter, WireError, WireResult, MAX_STRING_BYTES,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Player {
        score: u32,
        name: String,
    }

    fn player_registry() -> CodecRegistry {
        let mut builder = RegistryBuilder::standard();
        builder.register::<Player, _, _>(|registry| {
            CompositeCodec::builder("Player", registry)
                .scalar("score", |p: &Player| &p.score, |p: &mut Player| &mut p.score)?
                .scalar("name", |p: &Player| &p.name, |p: &mut Player| &mut p.name)?
                .build()
        });
        builder.build().unwrap()
    }

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = ByteBuffer::default();
        let _ = RegistryBuilder::standard();
        let _ = FactorySet::empty();
        let _ = FieldKind::Scalar;
        let _ = encoded_len(0);
        assert_eq!(DEFAULT_CAPACITY, 255);
        assert_eq!(MAX_STRING_BYTES, 255);
    }

    #[test]
    fn doctest_example() {
        let registry = player_registry();
        let player = Player {
            score: 42,
            name: "kd".to_owned(),
        };
        let codec = registry.get::<Player>().unwrap();

        let mut buf = ByteBuffer::default();
        codec.encode(&player, &mut buf).unwrap();

        buf.rewind();
        let mut decoded = Player::default();
        codec.decode(&mut buf, &mut decoded).unwrap();
        assert_eq!(decoded, player);
    }

    #[test]
    fn composite_exposes_layout_and_hash() {
        let registry = RegistryBuilder::standard().build().unwrap();
        let codec = CompositeCodec::<Player>::builder("Player", &registry)
            .scalar("score", |p: &Player| &p.score, |p: &mut Player| &mut p.score)
            .unwrap()
            .scalar("name", |p: &Player| &p.name, |p: &mut Player| &mut p.name)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(codec.layout().type_name, "Player");
        assert_eq!(codec.layout().fields.len(), 2);
        assert_eq!(codec.layout_hash(), layout_hash(codec.layout()));
    }
}
