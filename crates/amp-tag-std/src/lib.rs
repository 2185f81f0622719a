//! # amp-tag Std
//!
//! The standard attribute catalog.
//!
//! ## Overview
//!
//! - [`attrs`] - Derived attribute IDs (`AttrSpec/Login`, cell properties, ...)
//!   and glyph URL constants
//! - [`Position`], [`FsInfo`], [`LoginChallenge`], [`LoginResponse`] -
//!   payload types implementing the Value contract
//! - [`register_std`] - binds every std payload type in a registry
//!
//! ## Usage
//!
//! ```rust
//! use amp_tag_registry::{AttrCodec, Registry};
//! use amp_tag_std::{register_std, Position};
//!
//! let registry = Registry::default();
//! register_std(&registry).unwrap();
//!
//! let attr = registry.encode(&Position::new(1.0, 2.0, 3.0)).unwrap();
//! let value = registry.decode(&attr.id, &attr.bytes).unwrap();
//! assert_eq!(value.downcast_ref::<Position>(), Some(&Position::new(1.0, 2.0, 3.0)));
//! ```

pub mod attrs;
pub mod fsinfo;
pub mod login;
pub mod position;

pub use attrs::{attr_spec, cell_property, PinnableAttr};
pub use fsinfo::FsInfo;
pub use login::{LoginChallenge, LoginResponse};
pub use position::Position;

use amp_tag_registry::{Registry, Result};

/// Register every std payload type.
pub fn register_std(registry: &Registry) -> Result<()> {
    registry.register_type::<Position>()?;
    registry.register_type::<FsInfo>()?;
    registry.register_type::<LoginChallenge>()?;
    registry.register_type::<LoginResponse>()?;
    Ok(())
}
