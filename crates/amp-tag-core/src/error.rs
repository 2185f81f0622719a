//! Error types for amp tag core primitives.

use thiserror::Error;

/// Errors raised while deriving or parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("invalid spec name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid tag string {input:?}: {reason}")]
    InvalidTagString { input: String, reason: String },
}

impl TagError {
    pub(crate) fn invalid_name(name: &str, reason: impl Into<String>) -> Self {
        TagError::InvalidName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_tag_string(input: &str, reason: impl Into<String>) -> Self {
        TagError::InvalidTagString {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by a payload while moving to or from its store encoding.
///
/// Both kinds are recoverable per attribute: the surrounding record should
/// drop or flag the offending attribute rather than fail as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("decoding error: {0}")]
    Decoding(String),
}

impl ValueError {
    /// Check if this is a decoding failure.
    pub fn is_decoding(&self) -> bool {
        matches!(self, ValueError::Decoding(_))
    }

    /// Check if this is an encoding failure.
    pub fn is_encoding(&self) -> bool {
        matches!(self, ValueError::Encoding(_))
    }
}
