//! Factory sets: ordered, deduplicated codec construction plans.

use std::any::{type_name, TypeId};
use std::fmt;
use std::sync::Arc;

use wire::{Codec, Formatter};

use crate::error::RegistryResult;
use crate::lookup::{CodecRegistry, RegistryEntry};

/// A codec construction function, invoked with the registry under
/// construction so it can look up codecs for nested field types.
pub(crate) type BoxedFactory =
    Box<dyn Fn(&CodecRegistry) -> RegistryResult<RegistryEntry> + Send + Sync>;

pub(crate) struct FactoryEntry {
    pub(crate) type_id: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) factory: BoxedFactory,
}

/// An ordered collection of type → factory entries.
///
/// Insertion order is preserved (it is the deterministic pass order during
/// resolution); registering a type twice replaces the earlier factory in
/// place. A set is plain data until a `RegistryBuilder` resolves it, so
/// defaults can be constructed once at process start and passed around
/// explicitly instead of living in global mutable state.
#[derive(Default)]
pub struct FactorySet {
    entries: Vec<FactoryEntry>,
}

impl FactorySet {
    /// Creates an empty factory set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers a factory producing a codec for `T`.
    ///
    /// The factory may look up other codecs through the registry it
    /// receives; a [`CodecNotFound`](crate::RegistryError::CodecNotFound)
    /// from such a lookup makes the resolution loop retry this factory on
    /// a later pass.
    pub fn register<T, C, F>(&mut self, factory: F) -> &mut Self
    where
        T: 'static,
        C: Codec<T> + 'static,
        F: Fn(&CodecRegistry) -> RegistryResult<C> + Send + Sync + 'static,
    {
        self.insert(FactoryEntry {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            factory: Box::new(move |registry| {
                let codec: Arc<dyn Codec<T>> = Arc::new(factory(registry)?);
                Ok(RegistryEntry {
                    type_name: type_name::<T>(),
                    codec: Box::new(codec),
                    formatter: None,
                })
            }),
        });
        self
    }

    /// Registers a factory producing a formatter for `T`.
    ///
    /// The entry keeps a formatter handle alongside the codec handle,
    /// which lets composite array fields of type `T` use batch transfer.
    pub fn register_formatter<T, C, F>(&mut self, factory: F) -> &mut Self
    where
        T: 'static,
        C: Formatter<T> + 'static,
        F: Fn(&CodecRegistry) -> RegistryResult<C> + Send + Sync + 'static,
    {
        self.insert(FactoryEntry {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            factory: Box::new(move |registry| {
                let built = Arc::new(factory(registry)?);
                let formatter: Arc<dyn Formatter<T>> = built.clone();
                let codec: Arc<dyn Codec<T>> = built;
                Ok(RegistryEntry {
                    type_name: type_name::<T>(),
                    codec: Box::new(codec),
                    formatter: Some(Box::new(formatter)),
                })
            }),
        });
        self
    }

    /// Returns the number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no factories are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, entry: FactoryEntry) {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|existing| existing.type_id == entry.type_id)
        {
            *existing = entry;
        } else {
            self.entries.push(entry);
        }
    }

    pub(crate) fn into_entries(self) -> Vec<FactoryEntry> {
        self.entries
    }
}

impl fmt::Debug for FactorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.entries.iter().map(|entry| entry.type_name).collect();
        f.debug_struct("FactorySet").field("types", &names).finish()
    }
}
