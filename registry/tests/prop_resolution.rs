//! Property: registration order never affects resolution.

use std::sync::Arc;

use proptest::prelude::*;
use registry::{CodecRegistry, RegistryBuilder, RegistryResult};
use wire::{ByteBuffer, Codec, WireResult};

#[derive(Debug, Default)]
struct Ammo(u32);
#[derive(Debug, Default)]
struct Clip(u32);
#[derive(Debug, Default)]
struct Gun(u32);
#[derive(Debug, Default)]
struct Turret(u32);

/// Forwards to a dependency codec looked up at construction time.
struct Chained<T> {
    inner: Arc<dyn Codec<u32>>,
    project: fn(&T) -> u32,
    inject: fn(&mut T, u32),
}

impl<T: Send + Sync> Codec<T> for Chained<T> {
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

/// A codec chained through another registered wrapper type.
struct Nested<T, U: 'static> {
    inner: Arc<dyn Codec<U>>,
    project: fn(&T) -> U,
    inject: fn(&mut T, U),
}

impl<T: Send + Sync, U: Default + Send + Sync> Codec<T> for Nested<T, U> {
    fn encode(&self, value: &T, buf: &mut ByteBuffer) -> WireResult<()> {
        self.inner.encode(&(self.project)(value), buf)
    }

    fn decode(&self, buf: &mut ByteBuffer, dest: &mut T) -> WireResult<()> {
        let mut raw = U::default();
        self.inner.decode(buf, &mut raw)?;
        (self.inject)(dest, raw);
        Ok(())
    }
}

fn register_one(builder: &mut RegistryBuilder, which: usize) {
    match which {
        // Ammo and Turret lean directly on the default u32 codec.
        0 => {
            builder.register::<Ammo, _, _>(|registry: &CodecRegistry| -> RegistryResult<_> {
                Ok(Chained {
                    inner: registry.get::<u32>()?,
                    project: |ammo: &Ammo| ammo.0,
                    inject: |ammo, raw| ammo.0 = raw,
                })
            });
        }
        // Clip depends on Ammo, Gun depends on Clip: a three-deep chain
        // that only resolves once its tail exists.
        1 => {
            builder.register::<Clip, _, _>(|registry: &CodecRegistry| -> RegistryResult<_> {
                Ok(Nested {
                    inner: registry.get::<Ammo>()?,
                    project: |clip: &Clip| Ammo(clip.0),
                    inject: |clip, ammo: Ammo| clip.0 = ammo.0,
                })
            });
        }
        2 => {
            builder.register::<Gun, _, _>(|registry: &CodecRegistry| -> RegistryResult<_> {
                Ok(Nested {
                    inner: registry.get::<Clip>()?,
                    project: |gun: &Gun| Clip(gun.0),
                    inject: |gun, clip: Clip| gun.0 = clip.0,
                })
            });
        }
        _ => {
            builder.register::<Turret, _, _>(|registry: &CodecRegistry| -> RegistryResult<_> {
                Ok(Chained {
                    inner: registry.get::<u32>()?,
                    project: |turret: &Turret| turret.0,
                    inject: |turret, raw| turret.0 = raw,
                })
            });
        }
    }
}

proptest! {
    #[test]
    fn prop_any_registration_order_resolves(order in Just(vec![0usize, 1, 2, 3]).prop_shuffle()) {
        let mut builder = RegistryBuilder::standard();
        for which in order {
            register_one(&mut builder, which);
        }
        let registry = builder.build().unwrap();

        prop_assert!(registry.contains::<Ammo>());
        prop_assert!(registry.contains::<Clip>());
        prop_assert!(registry.contains::<Gun>());
        prop_assert!(registry.contains::<Turret>());

        // The deepest chain member round-trips through its dependencies.
        let codec = registry.get::<Gun>().unwrap();
        let mut buf = ByteBuffer::default();
        codec.encode(&Gun(4242), &mut buf).unwrap();
        buf.rewind();
        let mut dest = Gun::default();
        codec.decode(&mut buf, &mut dest).unwrap();
        prop_assert_eq!(dest.0, 4242);
    }
}
