//! Art loading errors.

use std::io;

/// Errors that can occur while loading art resources.
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    #[error("Art resource '{name}' is unavailable")]
    ResourceUnavailable {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl ArtError {
    /// Create a ResourceUnavailable error for `name`.
    pub fn unavailable(name: impl Into<String>, source: io::Error) -> Self {
        Self::ResourceUnavailable {
            name: name.into(),
            source,
        }
    }

    /// Name of the resource that failed to load.
    pub fn resource_name(&self) -> &str {
        match self {
            Self::ResourceUnavailable { name, .. } => name,
        }
    }
}
