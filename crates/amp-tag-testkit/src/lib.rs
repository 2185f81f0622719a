//! # amp-tag Testkit
//!
//! Testing utilities for amp-tag.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known paths with expected IDs for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the Spec hash chain:
//!
//! ```rust
//! use amp_tag_testkit::vectors::{all_vectors, spec_from_vector};
//!
//! for vector in all_vectors() {
//!     let spec = spec_from_vector(&vector);
//!     assert_eq!(spec.id().to_hex(), vector.expected_id);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use amp_tag_testkit::generators::dotted_path;
//! use amp_tag_core::Spec;
//!
//! proptest! {
//!     #[test]
//!     fn spec_id_is_deterministic(path in dotted_path()) {
//!         prop_assert_eq!(Spec::root().with(&path).id(), Spec::root().with(&path).id());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use amp_tag_testkit::fixtures::{stalled_clock, TestFixture};
//!
//! let fixture = TestFixture::new();
//! let tags = fixture.stamp_sequence(&stalled_clock(3), true);
//! assert!(tags[0] < tags[1] && tags[1] < tags[2]);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{assert_strictly_increasing, rewinding_clock, stalled_clock, TestFixture};
pub use vectors::{all_vectors, spec_from_vector, verify_all_vectors, GoldenVector};
