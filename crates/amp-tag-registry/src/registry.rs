//! The registry: Spec IDs bound to payload factories.
//!
//! Written mostly at startup, read from any number of threads afterwards.
//! Lookups share a read lock; registration takes the write lock, so racing
//! registrations for one Tag are resolved first-writer-wins and the loser is
//! detected rather than silently replacing the winner.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use amp_tag_core::{Spec, Tag, Value};

use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::error::{RegistryError, Result};
use crate::traits::{AttrCodec, Factory, RegisterResult, RegistryEntry};

/// Tag-to-factory table.
pub struct Registry {
    config: RegistryConfig,
    entries: RwLock<HashMap<Tag, RegistryEntry>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Bind `spec` to `factory`.
    ///
    /// The factory is called once to learn the concrete type and to check
    /// that the values it builds are bound to `spec`.
    pub fn register<F>(&self, spec: &Spec, factory: F) -> Result<RegisterResult>
    where
        F: Fn() -> Box<dyn Value> + Send + Sync + 'static,
    {
        let factory: Factory = Arc::new(factory);
        let probe = factory();
        let type_name = probe.type_name();

        let bound = probe.tag_spec();
        if bound.id() != spec.id() {
            tracing::error!(
                spec = %spec,
                bound = %bound,
                type_name,
                "factory builds values bound to another spec"
            );
            return Err(RegistryError::SpecMismatch {
                spec: spec.path(),
                type_name,
                actual: bound.path(),
            });
        }

        let id = spec.id();
        let type_id = Any::type_id(probe.as_any());
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = entries.get(&id) {
            if existing.type_id == type_id {
                return Ok(RegisterResult::AlreadyRegistered);
            }

            let previous = existing.type_name;
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    tracing::error!(
                        spec = %spec,
                        id = %id.short(),
                        existing = previous,
                        attempted = type_name,
                        "duplicate attribute registration"
                    );
                    return Err(RegistryError::DuplicateRegistration {
                        id,
                        spec: spec.path(),
                        existing: previous,
                        attempted: type_name,
                    });
                }
                DuplicatePolicy::Overwrite => {
                    tracing::warn!(
                        spec = %spec,
                        id = %id.short(),
                        previous,
                        replacement = type_name,
                        "replacing attribute registration"
                    );
                    entries.insert(
                        id,
                        RegistryEntry {
                            spec: spec.clone(),
                            type_name,
                            type_id,
                            factory,
                        },
                    );
                    return Ok(RegisterResult::Replaced { previous });
                }
            }
        }

        entries.insert(
            id,
            RegistryEntry {
                spec: spec.clone(),
                type_name,
                type_id,
                factory,
            },
        );
        tracing::debug!(spec = %spec, id = %id.short(), type_name, "registered attribute type");
        Ok(RegisterResult::Registered)
    }

    /// Register `T` under the Spec its default instance reports.
    pub fn register_type<T: Value + Default>(&self) -> Result<RegisterResult> {
        let spec = T::default().tag_spec();
        self.register(&spec, || Box::new(T::default()))
    }

    /// Get the binding for `id`.
    pub fn entry(&self, id: &Tag) -> Option<RegistryEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(id).cloned()
    }

    /// Check whether `id` is bound.
    pub fn contains(&self, id: &Tag) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.contains_key(id)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.len()
    }

    /// Check whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All bindings, sorted by Tag.
    pub fn entries(&self) -> Vec<RegistryEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut out: Vec<RegistryEntry> = entries.values().cloned().collect();
        out.sort_by_key(|e| e.id());
        out
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl AttrCodec for Registry {
    fn lookup(&self, id: &Tag) -> Option<Factory> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(id).map(RegistryEntry::factory)
    }
}
