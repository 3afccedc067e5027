//! Error types for registry construction and lookup.

use std::fmt;

use schema::LayoutError;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while building or querying a codec registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No codec is registered for the requested type.
    ///
    /// During registry construction this is the retry signal: the factory
    /// that observed it is attempted again on the next pass. After
    /// construction it is a missing registration, fatal at the call site.
    CodecNotFound {
        /// The requested type.
        type_name: &'static str,
    },

    /// A factory still cannot resolve a dependency in the final pass.
    ///
    /// Raised only after a full pass made no progress: either two codecs
    /// depend on each other directly, or a registration was forgotten.
    UnresolvableDependency {
        /// The codec whose factory stalled.
        codec: &'static str,
        /// The dependency its lookup could not find.
        missing: &'static str,
        /// All codecs still unresolved when construction gave up.
        pending: Vec<&'static str>,
    },

    /// A composite layout failed validation inside a factory.
    Layout(LayoutError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodecNotFound { type_name } => {
                write!(f, "no codec registered for `{type_name}`")
            }
            Self::UnresolvableDependency {
                codec,
                missing,
                pending,
            } => {
                write!(
                    f,
                    "codec for `{codec}` cannot be resolved: dependency `{missing}` \
                     is unavailable (unresolved: {pending:?})"
                )
            }
            Self::Layout(e) => write!(f, "layout error: {e}"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayoutError> for RegistryError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}
