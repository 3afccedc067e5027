//! Resolution-order scenarios for the registry builder.

use std::sync::Arc;

use registry::{CodecRegistry, RegistryBuilder, RegistryError, RegistryResult};
use wire::{ByteBuffer, Codec, WireResult};

#[derive(Debug, Default, PartialEq, Eq)]
struct Health(u32);

#[derive(Debug, Default, PartialEq, Eq)]
struct Shield(u32);

/// A codec that delegates to a dependency resolved at construction time.
struct WrappingCodec<T> {
    inner: Arc<dyn Codec<u32>>,
    project: fn(&T) -> u32,
    inject: fn(&mut T, u32),
}

impl<T: Send + Sync> Codec<T> for WrappingCodec<T> {
    fn encode(&self, value: &T, buf: &mut ByteBuffer) -> WireResult<()> {
        self.inner.encode(&(self.project)(value), buf)
    }

    fn decode(&self, buf: &mut ByteBuffer, dest: &mut T) -> WireResult<()> {
        let mut raw = 0u32;
        self.inner.decode(buf, &mut raw)?;
        (self.inject)(dest, raw);
        Ok(())
    }
}

fn health_factory(registry: &CodecRegistry) -> RegistryResult<WrappingCodec<Health>> {
    Ok(WrappingCodec {
        inner: registry.get::<u32>()?,
        project: |health| health.0,
        inject: |health, raw| health.0 = raw,
    })
}

fn shield_factory(registry: &CodecRegistry) -> RegistryResult<WrappingCodec<Shield>> {
    Ok(WrappingCodec {
        inner: registry.get::<u32>()?,
        project: |shield| shield.0,
        inject: |shield, raw| shield.0 = raw,
    })
}

fn roundtrip_health(registry: &CodecRegistry, value: u32) -> u32 {
    let codec = registry.get::<Health>().unwrap();
    let mut buf = ByteBuffer::default();
    codec.encode(&Health(value), &mut buf).unwrap();
    buf.rewind();
    let mut dest = Health::default();
    codec.decode(&mut buf, &mut dest).unwrap();
    dest.0
}

#[test]
fn dependent_factories_resolve_in_either_registration_order() {
    let mut forward = RegistryBuilder::standard();
    forward.register::<Health, _, _>(health_factory);
    forward.register::<Shield, _, _>(shield_factory);
    let forward = forward.build().unwrap();

    let mut reverse = RegistryBuilder::standard();
    reverse.register::<Shield, _, _>(shield_factory);
    reverse.register::<Health, _, _>(health_factory);
    let reverse = reverse.build().unwrap();

    assert_eq!(forward.len(), reverse.len());
    assert_eq!(forward.type_names(), reverse.type_names());
    assert_eq!(roundtrip_health(&forward, 9000), 9000);
    assert_eq!(roundtrip_health(&reverse, 9000), 9000);
}

#[test]
fn factory_registered_before_its_dependency_still_resolves() {
    // Health's factory needs the u32 codec, which only exists once the
    // defaults resolve; with Health registered into an empty default set
    // alongside a late u32 registration, the first pass stalls on Health
    // and the second pass completes it.
    let mut builder = RegistryBuilder::empty();
    builder.register::<Health, _, _>(health_factory);
    builder.register_formatter::<u32, _, _>(|_| Ok(wire::VarU32Formatter));
    let registry = builder.build().unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(roundtrip_health(&registry, 17), 17);
}

#[test]
fn missing_dependency_is_unresolvable() {
    let mut builder = RegistryBuilder::empty();
    builder.register::<Health, _, _>(health_factory);
    let err = builder.build().unwrap_err();

    match err {
        RegistryError::UnresolvableDependency {
            codec,
            missing,
            pending,
        } => {
            assert!(codec.contains("Health"));
            assert_eq!(missing, "u32");
            assert_eq!(pending.len(), 1);
        }
        other => panic!("expected UnresolvableDependency, got {other:?}"),
    }
}

#[test]
fn direct_cycle_is_unresolvable() {
    struct NoopCodec;
    impl Codec<Health> for NoopCodec {
        fn encode(&self, _: &Health, _: &mut ByteBuffer) -> WireResult<()> {
            Ok(())
        }
        fn decode(&self, _: &mut ByteBuffer, _: &mut Health) -> WireResult<()> {
            Ok(())
        }
    }
    impl Codec<Shield> for NoopCodec {
        fn encode(&self, _: &Shield, _: &mut ByteBuffer) -> WireResult<()> {
            Ok(())
        }
        fn decode(&self, _: &mut ByteBuffer, _: &mut Shield) -> WireResult<()> {
            Ok(())
        }
    }

    let mut builder = RegistryBuilder::empty();
    builder.register::<Health, NoopCodec, _>(|registry| {
        registry.get::<Shield>()?;
        Ok(NoopCodec)
    });
    builder.register::<Shield, NoopCodec, _>(|registry| {
        registry.get::<Health>()?;
        Ok(NoopCodec)
    });
    let err = builder.build().unwrap_err();

    match err {
        RegistryError::UnresolvableDependency { pending, .. } => {
            assert_eq!(pending.len(), 2, "both cycle members stay unresolved");
        }
        other => panic!("expected UnresolvableDependency, got {other:?}"),
    }
}

#[test]
fn types_sharing_primitive_dependencies_build_in_any_order() {
    // Health and Shield both lean on the same already-resolved primitive
    // rather than on each other; registration order must not matter.
    for flip in [false, true] {
        let mut builder = RegistryBuilder::standard();
        if flip {
            builder.register::<Shield, _, _>(shield_factory);
            builder.register::<Health, _, _>(health_factory);
        } else {
            builder.register::<Health, _, _>(health_factory);
            builder.register::<Shield, _, _>(shield_factory);
        }
        let registry = builder.build().unwrap();

        let shield_codec = registry.get::<Shield>().unwrap();
        let mut buf = ByteBuffer::default();
        shield_codec.encode(&Shield(55), &mut buf).unwrap();
        buf.rewind();
        let mut dest = Shield::default();
        shield_codec.decode(&mut buf, &mut dest).unwrap();
        assert_eq!(dest, Shield(55));
    }
}

#[test]
fn lookup_after_build_for_unregistered_type_fails() {
    let registry = RegistryBuilder::standard().build().unwrap();
    let err = registry.get::<Health>().unwrap_err();
    assert!(matches!(err, RegistryError::CodecNotFound { .. }));
}
