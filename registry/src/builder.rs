//! Registry construction: merge factory sets, resolve to a fixed point.

use wire::{Codec, Formatter};

use crate::error::{RegistryError, RegistryResult};
use crate::factory::{FactoryEntry, FactorySet};
use crate::lookup::CodecRegistry;

/// Builds a [`CodecRegistry`] from a default factory set plus per-build
/// registrations.
///
/// Per-build registrations override defaults on type collision. `build`
/// resolves everything in passes: factories whose nested lookups miss are
/// retried once anything else makes progress, so registration order never
/// matters; only a genuine cycle or a missing registration fails.
pub struct RegistryBuilder {
    defaults: FactorySet,
    registered: FactorySet,
}

impl RegistryBuilder {
    /// Creates a builder over an explicit default factory set.
    #[must_use]
    pub fn new(defaults: FactorySet) -> Self {
        Self {
            defaults,
            registered: FactorySet::empty(),
        }
    }

    /// Creates a builder preloaded with [`FactorySet::standard`].
    #[must_use]
    pub fn standard() -> Self {
        Self::new(FactorySet::standard())
    }

    /// Creates a builder with no defaults at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(FactorySet::empty())
    }

    /// Registers a per-build codec factory, overriding any default for `T`.
    pub fn register<T, C, F>(&mut self, factory: F) -> &mut Self
    where
        T: 'static,
        C: Codec<T> + 'static,
        F: Fn(&CodecRegistry) -> RegistryResult<C> + Send + Sync + 'static,
    {
        self.registered.register(factory);
        self
    }

    /// Registers a per-build formatter factory, overriding any default for
    /// `T`.
    pub fn register_formatter<T, C, F>(&mut self, factory: F) -> &mut Self
    where
        T: 'static,
        C: Formatter<T> + 'static,
        F: Fn(&CodecRegistry) -> RegistryResult<C> + Send + Sync + 'static,
    {
        self.registered.register_formatter(factory);
        self
    }

    /// Resolves every factory exactly once and returns the registry.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnresolvableDependency`] when a pass makes no
    /// progress and the final pass still hits a missing lookup; any other
    /// factory error propagates as-is on first occurrence.
    pub fn build(self) -> RegistryResult<CodecRegistry> {
        let mut merged = self.defaults;
        for entry in self.registered.into_entries() {
            merged.insert(entry);
        }

        let mut pending = merged.into_entries();
        let mut registry = CodecRegistry::with_capacity(pending.len());

        while !pending.is_empty() {
            let mut progressed = false;
            let mut stalled = Vec::with_capacity(pending.len());

            for entry in pending {
                match (entry.factory)(&registry) {
                    Ok(built) => {
                        registry.insert(entry.type_id, built);
                        progressed = true;
                    }
                    // A nested lookup missed: the dependency may simply
                    // not be built yet, so keep the entry for the next
                    // pass.
                    Err(RegistryError::CodecNotFound { .. }) => stalled.push(entry),
                    Err(err) => return Err(err),
                }
            }

            if !progressed {
                return final_pass(registry, stalled);
            }
            pending = stalled;
        }

        Ok(registry)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::standard()
    }
}

/// One last pass where a missed lookup is no longer retried.
///
/// Reaching this point means a full pass built nothing, so a miss here is
/// a cycle between composite codecs or a forgotten registration, never
/// "needs another pass".
fn final_pass(
    mut registry: CodecRegistry,
    pending: Vec<FactoryEntry>,
) -> RegistryResult<CodecRegistry> {
    let unresolved: Vec<&'static str> = pending.iter().map(|entry| entry.type_name).collect();

    for entry in pending {
        match (entry.factory)(&registry) {
            Ok(built) => registry.insert(entry.type_id, built),
            Err(RegistryError::CodecNotFound { type_name }) => {
                return Err(RegistryError::UnresolvableDependency {
                    codec: entry.type_name,
                    missing: type_name,
                    pending: unresolved,
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(registry)
}
