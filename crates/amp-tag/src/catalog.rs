//! The Catalog: unified API for attribute identity.
//!
//! A Catalog owns the registry and the Time-Tag generator a process uses. It
//! is built once at startup and passed (usually behind an `Arc`) to the
//! encoders, decoders and storage code that need it.

use std::sync::Arc;
use std::time::SystemTime;

use amp_tag_core::{shared_generator, Spec, Tag, TimeTagGenerator, Value};
use amp_tag_registry::{
    AttrCodec, DecodedAttrs, EncodedAttr, Factory, RegisterResult, Registry, RegistryConfig,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for the Catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Registry configuration.
    pub registry: RegistryConfig,
    /// Whether to register the std payload types on startup.
    pub register_std: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig::default(),
            register_std: true,
        }
    }
}

/// The main Catalog struct.
///
/// Provides:
/// - Declaring Specs from dotted paths
/// - Registering payload types
/// - Encoding and decoding `(Tag, bytes)` attributes
/// - Stamping monotonic Time-Tags
pub struct Catalog {
    registry: Arc<Registry>,
    clock: Arc<TimeTagGenerator>,
    config: CatalogConfig,
}

impl Catalog {
    /// Create a new catalog stamping from the process-wide generator.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        Self::with_clock(config, shared_generator())
    }

    /// Create a catalog with a specific Time-Tag generator.
    ///
    /// Tags from a private generator are only ordered among themselves.
    pub fn with_clock(
        config: CatalogConfig,
        clock: impl Into<Arc<TimeTagGenerator>>,
    ) -> Result<Self> {
        let registry = Registry::new(config.registry.clone());
        if config.register_std {
            amp_tag_std::register_std(&registry)?;
        }
        tracing::info!(types = registry.len(), "attribute catalog ready");

        Ok(Self {
            registry: Arc::new(registry),
            clock: clock.into(),
            config,
        })
    }

    /// Catalog with default configuration and the std payload types.
    pub fn with_std() -> Result<Self> {
        Self::new(CatalogConfig::default())
    }

    /// The configuration this catalog was built with.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A shared handle to the registry, for handing to other components.
    pub fn shared_registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Identity
    // ─────────────────────────────────────────────────────────────────────────

    /// Derive the Spec at a dotted path under the root.
    ///
    /// Unlike [`Spec::with`], an invalid path is returned as an error, so this
    /// is the entry point for paths that come from input.
    pub fn declare(&self, path: &str) -> Result<Spec> {
        Ok(Spec::root().try_with(path)?)
    }

    /// Register payload type `T`.
    pub fn register_type<T: Value + Default>(&self) -> Result<RegisterResult> {
        Ok(self.registry.register_type::<T>()?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attributes
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode a payload keyed by its Spec ID.
    pub fn encode_attr(&self, value: &dyn Value) -> Result<EncodedAttr> {
        Ok(self.registry.encode(value)?)
    }

    /// Decode one attribute.
    pub fn decode_attr(&self, id: &Tag, bytes: &[u8]) -> Result<Box<dyn Value>> {
        Ok(self.registry.decode(id, bytes)?)
    }

    /// Decode one attribute as the concrete type `T`.
    ///
    /// Returns `Ok(None)` when the Tag is bound to a different type.
    pub fn decode_as<T: Value>(&self, id: &Tag, bytes: &[u8]) -> Result<Option<Box<T>>> {
        Ok(self.decode_attr(id, bytes)?.downcast::<T>())
    }

    /// Decode a batch of attributes; see [`Registry::decode_all`].
    pub fn decode_all<'a, I>(&self, pairs: I) -> DecodedAttrs
    where
        I: IntoIterator<Item = (Tag, &'a [u8])>,
    {
        self.registry.decode_all(pairs)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Time
    // ─────────────────────────────────────────────────────────────────────────

    /// A monotonic Time-Tag for now.
    pub fn stamp(&self) -> Tag {
        self.clock.now(true)
    }

    /// A Time-Tag for `t`.
    pub fn stamp_at(&self, t: SystemTime, monotonic: bool) -> Tag {
        self.clock.from_time(t, monotonic)
    }
}

impl AttrCodec for Catalog {
    fn lookup(&self, id: &Tag) -> Option<Factory> {
        self.registry.lookup(id)
    }
}
