//! # amp-tag Registry
//!
//! Binds Spec IDs to payload factories so attributes received only as
//! `(Tag, bytes)` can be turned back into typed values.
//!
//! ## Key Types
//!
//! - [`Registry`] - The Tag-to-factory table
//! - [`AttrCodec`] - The decode/encode seam used by storage and transport
//! - [`RegisterResult`] - Result of binding a payload type
//! - [`DecodedAttrs`] - Outcome of decoding a batch of attributes
//!
//! ## Usage
//!
//! ```rust
//! use amp_tag_core::{Spec, StoreRecord};
//! use amp_tag_registry::{AttrCodec, Registry, RegistryConfig};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct Volume {
//!     level: u8,
//! }
//!
//! impl StoreRecord for Volume {
//!     fn spec() -> Spec {
//!         Spec::root().with("doc").with("volume")
//!     }
//! }
//!
//! let registry = Registry::new(RegistryConfig::default());
//! registry.register_type::<Volume>().unwrap();
//!
//! let attr = registry.encode(&Volume { level: 11 }).unwrap();
//! let value = registry.decode(&attr.id, &attr.bytes).unwrap();
//! assert_eq!(value.downcast_ref::<Volume>(), Some(&Volume { level: 11 }));
//! ```
//!
//! ## Design Notes
//!
//! - **No global table**: a registry is built explicitly and handed to the
//!   code that needs it
//! - **Forward compatible**: unknown Tags are a `None`/`UnknownAttribute`
//!   result, never a panic
//! - **Collisions are loud**: a second type claiming a bound Tag is rejected
//!   and logged unless the overwrite policy is configured

mod batch;
pub mod config;
pub mod error;
pub mod registry;
pub mod traits;

pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{RegistryError, Result};
pub use registry::Registry;
pub use traits::{AttrCodec, DecodedAttrs, EncodedAttr, Factory, RegisterResult, RegistryEntry};
