//! Registry configuration.

use serde::{Deserialize, Serialize};

/// What to do when a Tag is already bound to a different payload type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Refuse the registration with `DuplicateRegistration`.
    #[default]
    Reject,
    /// Replace the existing binding and log a warning.
    Overwrite,
}

/// Configuration for a [`crate::Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Policy for conflicting registrations.
    pub duplicate_policy: DuplicatePolicy,
    /// Log skipped unknown attributes at debug level.
    pub log_unknown: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            log_unknown: true,
        }
    }
}
