//! # amp-tag
//!
//! The unified API for amp attribute identity: derived identifiers, a
//! registry that decodes payloads by identifier, and time-derived Tags.
//!
//! ## Overview
//!
//! - **Tags**: 256-bit, totally ordered identifiers usable as map and sort keys
//! - **Specs**: hierarchical names whose Tag is derived by hashing, so two
//!   programs that never talk agree on every attribute ID
//! - **Values**: payload types that marshal to and from the store encoding
//! - **Registry**: Tag → factory, for decoding `(Tag, bytes)` pairs
//! - **Time-Tags**: sortable, unique Tags stamped from the clock
//!
//! ## Usage
//!
//! ```rust
//! use amp_tag::{Catalog, Position};
//!
//! let catalog = Catalog::with_std().unwrap();
//!
//! // Producer side
//! let attr = catalog.encode_attr(&Position::new(0.5, 1.5, 2.5)).unwrap();
//!
//! // Consumer side: only the Tag and the bytes travel
//! let value = catalog.decode_attr(&attr.id, &attr.bytes).unwrap();
//! assert_eq!(
//!     value.downcast_ref::<Position>(),
//!     Some(&Position::new(0.5, 1.5, 2.5))
//! );
//!
//! // Record stamps
//! let created = catalog.stamp();
//! assert!(catalog.stamp() > created);
//! ```
//!
//! ## Re-exports
//!
//! - `amp_tag::core` - Tags, Specs, the Value contract, Time-Tags
//! - `amp_tag::registry` - The registry and its codec trait
//! - `amp_tag::std_attrs` - The standard attribute catalog

pub mod catalog;
pub mod error;

// Re-export component crates
pub use amp_tag_core as core;
pub use amp_tag_registry as registry;
pub use amp_tag_std as std_attrs;

pub use catalog::{Catalog, CatalogConfig};
pub use error::{AmpError, Result};

pub use amp_tag_core::{
    from_time, timestamp_field, Spec, StoreRecord, Tag, TagError, TimeTagGenerator, Value,
    ValueError,
};
pub use amp_tag_registry::{
    AttrCodec, DecodedAttrs, DuplicatePolicy, EncodedAttr, RegisterResult, Registry,
    RegistryConfig, RegistryError,
};
pub use amp_tag_std::{FsInfo, LoginChallenge, LoginResponse, PinnableAttr, Position};
