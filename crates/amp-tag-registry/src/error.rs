//! Error types for the registry.

use amp_tag_core::{Tag, ValueError};
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two different payload types claim the same Tag.
    #[error("duplicate registration for {spec} ({id}): {existing} already registered, refusing {attempted}")]
    DuplicateRegistration {
        id: Tag,
        spec: String,
        existing: &'static str,
        attempted: &'static str,
    },

    /// The factory builds values bound to a different Spec.
    #[error("factory for {spec} builds {type_name}, which is bound to {actual}")]
    SpecMismatch {
        spec: String,
        type_name: &'static str,
        actual: String,
    },

    /// No factory is registered for the Tag.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(Tag),

    /// The payload failed to encode or decode.
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl RegistryError {
    /// Check if this is an unknown-attribute miss.
    pub fn is_unknown(&self) -> bool {
        matches!(self, RegistryError::UnknownAttribute(_))
    }

    /// Check if this is a payload decoding failure.
    pub fn is_decoding(&self) -> bool {
        matches!(self, RegistryError::Value(e) if e.is_decoding())
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
