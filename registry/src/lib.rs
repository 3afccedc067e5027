//! Codec registry and factory resolution for the netval codec.
//!
//! This crate turns an unordered collection of codec-construction
//! factories into an immutable type → codec mapping:
//! - [`FactorySet`] collects factories (the standard defaults are an
//!   explicit value, not global state)
//! - [`RegistryBuilder`] merges defaults with per-build overrides and
//!   resolves them to a fixed point
//! - [`CodecRegistry`] is the resulting read-only lookup service
//!
//! Factories receive the registry under construction, so a composite
//! codec's factory can look up codecs for its field types even when those
//! are registered later or resolved in a later pass. Dependency edges are
//! discovered by attempting construction: a factory that fails with
//! [`RegistryError::CodecNotFound`] is retried until a full pass makes no
//! progress, at which point one final pass converts the miss into
//! [`RegistryError::UnresolvableDependency`].
//!
//! # Example
//!
//! ```
//! use registry::RegistryBuilder;
//!
//! let registry = RegistryBuilder::standard().build().unwrap();
//!
//! let codec = registry.get::<u32>().unwrap();
//! let mut buf = wire::ByteBuffer::default();
//! codec.encode(&42, &mut buf).unwrap();
//!
//! buf.rewind();
//! let mut dest = 0u32;
//! codec.decode(&mut buf, &mut dest).unwrap();
//! assert_eq!(dest, 42);
//! ```

mod builder;
mod defaults;
mod error;
mod factory;
mod lookup;

pub use builder::RegistryBuilder;
pub use error::{RegistryError, RegistryResult};
pub use factory::FactorySet;
pub use lookup::CodecRegistry;
