//! The resolved codec registry.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use wire::{Codec, Formatter};

use crate::error::{RegistryError, RegistryResult};

/// A resolved registration: type-erased handles to one codec instance.
///
/// `codec` always holds an `Arc<dyn Codec<T>>`; `formatter` additionally
/// holds an `Arc<dyn Formatter<T>>` to the same instance when the
/// registration was formatter-backed, which is what unlocks batch array
/// transfer for that element type.
pub(crate) struct RegistryEntry {
    pub(crate) type_name: &'static str,
    pub(crate) codec: Box<dyn Any + Send + Sync>,
    pub(crate) formatter: Option<Box<dyn Any + Send + Sync>>,
}

/// An immutable mapping from type identity to codec instances.
///
/// Built exactly once by a `RegistryBuilder`; afterwards it is read-only
/// and freely shareable across threads. Lookups are O(1) map reads.
pub struct CodecRegistry {
    entries: HashMap<TypeId, RegistryEntry>,
}

impl CodecRegistry {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, type_id: TypeId, entry: RegistryEntry) {
        self.entries.insert(type_id, entry);
    }

    /// Returns the codec registered for `T`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::CodecNotFound`] if `T` was never registered.
    pub fn get<T: 'static>(&self) -> RegistryResult<Arc<dyn Codec<T>>> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.codec.downcast_ref::<Arc<dyn Codec<T>>>())
            .cloned()
            .ok_or_else(|| RegistryError::CodecNotFound {
                type_name: std::any::type_name::<T>(),
            })
    }

    /// Returns the formatter handle for `T`, if the registration was
    /// formatter-backed.
    #[must_use]
    pub fn formatter<T: 'static>(&self) -> Option<Arc<dyn Formatter<T>>> {
        self.entries
            .get(&TypeId::of::<T>())?
            .formatter
            .as_ref()?
            .downcast_ref::<Arc<dyn Formatter<T>>>()
            .cloned()
    }

    /// Returns `true` if a codec is registered for `T`.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Returns the number of registered codecs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the registered type names, sorted.
    #[must_use]
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.values().map(|entry| entry.type_name).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire::{ByteBuffer, U16Formatter, WireResult};

    fn single_entry_registry() -> CodecRegistry {
        let mut registry = CodecRegistry::with_capacity(1);
        let built = Arc::new(U16Formatter);
        let formatter: Arc<dyn Formatter<u16>> = built.clone();
        let codec: Arc<dyn Codec<u16>> = built;
        registry.insert(
            TypeId::of::<u16>(),
            RegistryEntry {
                type_name: "u16",
                codec: Box::new(codec),
                formatter: Some(Box::new(formatter)),
            },
        );
        registry
    }

    #[test]
    fn get_returns_registered_codec() {
        let registry = single_entry_registry();
        let codec = registry.get::<u16>().unwrap();

        let mut buf = ByteBuffer::new(4);
        codec.encode(&512, &mut buf).unwrap();
        buf.rewind();
        let mut dest = 0u16;
        codec.decode(&mut buf, &mut dest).unwrap();
        assert_eq!(dest, 512);
    }

    #[test]
    fn get_unknown_type_fails() {
        let registry = single_entry_registry();
        let err = registry.get::<u32>().unwrap_err();
        assert!(matches!(err, RegistryError::CodecNotFound { .. }));
    }

    #[test]
    fn formatter_handle_present_for_formatter_entry() {
        let registry = single_entry_registry();
        assert!(registry.formatter::<u16>().is_some());
        assert!(registry.formatter::<u32>().is_none());
    }

    #[test]
    fn contains_and_len() {
        let registry = single_entry_registry();
        assert!(registry.contains::<u16>());
        assert!(!registry.contains::<bool>());
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_shareable<T: Send + Sync>() {}
        assert_shareable::<CodecRegistry>();
    }

    #[test]
    fn shared_codec_is_reusable_across_threads() {
        let registry = Arc::new(single_entry_registry());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || -> WireResult<u16> {
                    let codec = registry.get::<u16>().unwrap();
                    let mut buf = ByteBuffer::new(4);
                    codec.encode(&(i as u16), &mut buf)?;
                    buf.rewind();
                    let mut dest = 0u16;
                    codec.decode(&mut buf, &mut dest)?;
                    Ok(dest)
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap().unwrap(), i as u16);
        }
    }
}
