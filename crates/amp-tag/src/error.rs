//! Error types for the facade.

use amp_tag_core::{Tag, TagError, ValueError};
use amp_tag_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum AmpError {
    /// Invalid spec name or tag string.
    #[error("tag error: {0}")]
    Tag(#[from] TagError),

    /// Registration or lookup error.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Payload encoding or decoding error.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

impl AmpError {
    /// The unknown Tag, if this is an unknown-attribute miss.
    pub fn unknown_attribute(&self) -> Option<Tag> {
        match self {
            AmpError::Registry(RegistryError::UnknownAttribute(id)) => Some(*id),
            _ => None,
        }
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, AmpError>;
