//! The Value contract: what every attribute payload type provides.
//!
//! The store and transport layers only ever see `dyn Value`; they never
//! inspect a payload's concrete shape. A payload binds to one [`Spec`] and
//! moves through the store as `(spec.id(), bytes)`.
//!
//! Most payloads are plain serde structs. Implementing [`StoreRecord`] for
//! such a type gives it a [`Value`] implementation backed by the CBOR store
//! codec in [`crate::canonical`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::Any;
use std::fmt;

use crate::canonical::{marshal_cbor_to_store, unmarshal_cbor_from_store};
use crate::error::ValueError;
use crate::spec::Spec;

/// The capability set of an attribute payload.
pub trait Value: Any + Send + Sync + fmt::Debug {
    /// The Spec this type is bound to. Constant per type.
    fn tag_spec(&self) -> Spec;

    /// A zero-valued instance of the same concrete type.
    fn new_value(&self) -> Box<dyn Value>;

    /// Append the encoded form of `self` to `buf` and return it.
    fn marshal_to_store(&self, buf: Vec<u8>) -> Result<Vec<u8>, ValueError>;

    /// Replace the contents of `self` with the decoded `bytes`.
    fn unmarshal_from_store(&mut self, bytes: &[u8]) -> Result<(), ValueError>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl dyn Value {
    /// Check whether the concrete type is `T`.
    pub fn is<T: Value>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow as the concrete type `T`.
    pub fn downcast_ref<T: Value>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Take ownership as the concrete type `T`.
    pub fn downcast<T: Value>(self: Box<Self>) -> Option<Box<T>> {
        self.into_any().downcast::<T>().ok()
    }
}

/// A serde payload stored with the CBOR store codec.
///
/// `check` states the payload's invariants. It runs before encoding (a
/// violation is [`ValueError::Encoding`]) and after decoding (a violation is
/// [`ValueError::Decoding`]).
pub trait StoreRecord:
    Serialize + DeserializeOwned + Default + fmt::Debug + Send + Sync + 'static
{
    /// The Spec this record type is bound to.
    fn spec() -> Spec;

    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

impl<T: StoreRecord> Value for T {
    fn tag_spec(&self) -> Spec {
        T::spec()
    }

    fn new_value(&self) -> Box<dyn Value> {
        Box::new(T::default())
    }

    fn marshal_to_store(&self, buf: Vec<u8>) -> Result<Vec<u8>, ValueError> {
        self.check().map_err(ValueError::Encoding)?;
        marshal_cbor_to_store(self, buf)
    }

    fn unmarshal_from_store(&mut self, bytes: &[u8]) -> Result<(), ValueError> {
        let decoded: T = unmarshal_cbor_from_store(bytes)?;
        decoded.check().map_err(ValueError::Decoding)?;
        *self = decoded;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
