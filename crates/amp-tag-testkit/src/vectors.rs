//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the Spec hash chain so every implementation derives
//! identical IDs for identical paths.

use amp_tag_core::{Spec, Tag, TagError};
use serde::{Deserialize, Serialize};

/// A golden test vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: String,
    /// Dotted path under the root, as a caller would write it.
    pub path: String,
    /// Canonical path after case folding.
    pub canonical_path: String,
    /// Expected ID (hex, `tag-v1`).
    pub expected_id: String,
}

fn vector(name: &str, path: &str, canonical_path: &str, expected_id: &str) -> GoldenVector {
    GoldenVector {
        name: name.to_string(),
        path: path.to_string(),
        canonical_path: canonical_path.to_string(),
        expected_id: expected_id.to_string(),
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        vector(
            "attr namespace",
            "AttrSpec",
            "attrspec",
            "02ee78cfc1bd3202e7be4372a6dd953dbee6ed88ffd64e33d270874a564947cf",
        ),
        vector(
            "login attribute",
            "AttrSpec.Login",
            "attrspec.login",
            "cfaff3e2d45b00720a09210fd350b40457c12fbcc84cb6f565c3fe537e1a7ff0",
        ),
        vector(
            "login challenge attribute",
            "AttrSpec.LoginChallenge",
            "attrspec.loginchallenge",
            "2852ec0b84745c2a7996938c121bfb397f44d4365785de7aaa0d9374c5b6bc02",
        ),
        vector(
            "position attribute",
            "AttrSpec.Position",
            "attrspec.position",
            "24fcf72947eb8f0a2322d7077e28b068c8bc0e514b722b8ade269bb4a4a4015f",
        ),
        vector(
            "fs info attribute",
            "AttrSpec.FSInfo",
            "attrspec.fsinfo",
            "5f5373e9d15a1afe515abf9d12817e6548a3fd14d39044e9e21c70cd0c64a64a",
        ),
        vector(
            "cell property namespace",
            "cell-property",
            "cell-property",
            "9fcc87913546528d6fee85c33de24039463491849180da7cab44cc1c9c3346c8",
        ),
        vector(
            "cell label property",
            "cell-property.text.Tag.label",
            "cell-property.text.tag.label",
            "b4f04fd4445199fb68c408d6e29a0f99f9e3e93cd2004746316bc802318291f3",
        ),
    ]
}

/// Derive the Spec a vector describes.
pub fn spec_from_vector(vector: &GoldenVector) -> Spec {
    Spec::root().with(&vector.path)
}

/// Verify all golden vectors.
///
/// Returns `(name, matches, actual_hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let spec = spec_from_vector(v);
            let hex = spec.id().to_hex();
            let matches = hex == v.expected_id && spec.path() == v.canonical_path;
            (v.name.clone(), matches, hex)
        })
        .collect()
}

/// Parse a vector's expected ID.
pub fn expected_tag(vector: &GoldenVector) -> Result<Tag, TagError> {
    Tag::from_hex(&vector.expected_id)
}
