//! AttrCodec trait: the seam between attribute identity and the layers that
//! persist or transmit `(Tag, bytes)` pairs.
//!
//! Encoders, decoders and storage only depend on this trait, so they can be
//! handed a [`crate::Registry`] (or anything wrapping one) explicitly instead
//! of reaching for process-wide state.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use amp_tag_core::{Spec, Tag, Value, ValueError};
use bytes::Bytes;

use crate::error::{RegistryError, Result};

/// Builds a blank payload ready to be unmarshaled into.
pub type Factory = Arc<dyn Fn() -> Box<dyn Value> + Send + Sync>;

/// Result of registering a payload type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterResult {
    /// The Tag was new.
    Registered,
    /// The same payload type was already bound to this Tag (idempotent).
    AlreadyRegistered,
    /// A different payload type was replaced under the overwrite policy.
    Replaced {
        /// Type name of the replaced binding.
        previous: &'static str,
    },
}

/// One binding in the registry.
#[derive(Clone)]
pub struct RegistryEntry {
    /// The Spec the payload type is bound to.
    pub spec: Spec,
    /// Concrete type name, for diagnostics.
    pub type_name: &'static str,
    pub(crate) type_id: TypeId,
    pub(crate) factory: Factory,
}

impl RegistryEntry {
    /// The bound Tag.
    pub fn id(&self) -> Tag {
        self.spec.id()
    }

    /// A clone of the factory.
    pub fn factory(&self) -> Factory {
        Arc::clone(&self.factory)
    }

    /// Build a blank payload.
    pub fn new_value(&self) -> Box<dyn Value> {
        (self.factory)()
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("spec", &self.spec)
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// An encoded attribute as it travels through a store or transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAttr {
    /// Spec ID of the payload type.
    pub id: Tag,
    /// Store encoding of the payload.
    pub bytes: Bytes,
}

/// Decode a `(Tag, bytes)` pair back into a typed payload.
pub trait AttrCodec: Send + Sync {
    /// Find the factory bound to `id`. `None` means the attribute is unknown
    /// to this process and should be skipped.
    fn lookup(&self, id: &Tag) -> Option<Factory>;

    /// Lookup, build a blank value, and unmarshal `bytes` into it.
    fn decode(&self, id: &Tag, bytes: &[u8]) -> Result<Box<dyn Value>> {
        let factory = self.lookup(id).ok_or(RegistryError::UnknownAttribute(*id))?;
        let mut value = factory();
        value.unmarshal_from_store(bytes)?;
        Ok(value)
    }

    /// Marshal `value` keyed by its Spec ID.
    fn encode(&self, value: &dyn Value) -> Result<EncodedAttr> {
        let id = value.tag_spec().id();
        let bytes = value.marshal_to_store(Vec::new())?;
        Ok(EncodedAttr {
            id,
            bytes: Bytes::from(bytes),
        })
    }
}

/// Outcome of decoding a batch of attributes.
///
/// A batch never fails as a whole: unknown attributes are skipped and
/// malformed ones are reported individually.
#[derive(Debug, Default)]
pub struct DecodedAttrs {
    /// Successfully decoded payloads, in input order.
    pub values: Vec<(Tag, Box<dyn Value>)>,
    /// Tags with no registered factory.
    pub skipped: Vec<Tag>,
    /// Tags whose payload failed to decode.
    pub failed: Vec<(Tag, ValueError)>,
}

impl DecodedAttrs {
    /// Check that nothing was skipped or dropped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }

    /// The first decoded payload of type `T`.
    pub fn get<T: Value>(&self) -> Option<&T> {
        self.values.iter().find_map(|(_, v)| v.downcast_ref::<T>())
    }
}
