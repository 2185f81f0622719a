//! # amp-tag Core
//!
//! Pure primitives for attribute identity: tags, specs, and the value contract.
//!
//! This crate contains no I/O, no storage, no networking. Every operation is
//! bounded in-memory computation and safe to call from any context.
//!
//! ## Key Types
//!
//! - [`Tag`] - 256-bit totally ordered identifier
//! - [`Spec`] - Hierarchical namespace node with a content-addressed ID
//! - [`Value`] - The capability set of an attribute payload
//! - [`StoreRecord`] - Serde payloads that get [`Value`] for free
//! - [`TimeTagGenerator`] - Sortable, unique Tags from wall-clock time
//!
//! ## Derivation
//!
//! ```rust
//! use amp_tag_core::Spec;
//!
//! let login = Spec::root().with("AttrSpec").with("Login");
//! assert_eq!(login.path(), "attrspec.login");
//! assert_eq!(
//!     login.id().to_hex(),
//!     "cfaff3e2d45b00720a09210fd350b40457c12fbcc84cb6f565c3fe537e1a7ff0"
//! );
//! ```

pub mod canonical;
pub mod error;
pub mod spec;
pub mod tag;
pub mod time;
pub mod validation;
pub mod value;

pub use canonical::{marshal_cbor_to_store, unmarshal_cbor_from_store};
pub use error::{TagError, ValueError};
pub use spec::{derive_child_id, root_id, Spec};
pub use tag::Tag;
pub use time::{default_generator, from_time, shared_generator, timestamp_field, TimeTagGenerator};
pub use validation::{canonical_name, canonical_segments};
pub use value::{StoreRecord, Value};
