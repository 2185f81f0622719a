//! The Tag identity space.
//!
//! A [`Tag`] is a 256-bit identifier stored as four `u64` components. Ordering
//! is lexicographic over the components, component 0 first, which makes a Tag
//! usable directly as a sort key or map key.
//!
//! ## Canonical string form (`tag-v1`)
//!
//! Exactly 64 hex characters: the big-endian bytes of component 0 through
//! component 3. Output is lower case; input may be either case. Because the
//! bytes are big-endian, string order equals Tag order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::TagError;

/// Version label of the canonical string form.
pub const TAG_STRING_VERSION: &str = "tag-v1";

/// Number of `u64` components in a Tag.
pub const TAG_COMPONENTS: usize = 4;

/// Width of a Tag in bytes.
pub const TAG_BYTES: usize = TAG_COMPONENTS * 8;

/// A fixed-width, totally ordered identifier.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tag(pub [u64; TAG_COMPONENTS]);

impl Tag {
    /// The all-zero sentinel meaning "unset".
    pub const ZERO: Self = Self([0; TAG_COMPONENTS]);

    /// Create a Tag from its components, most significant first.
    pub const fn new(c0: u64, c1: u64, c2: u64, c3: u64) -> Self {
        Self([c0, c1, c2, c3])
    }

    /// Create a Tag from raw components.
    pub const fn from_components(components: [u64; TAG_COMPONENTS]) -> Self {
        Self(components)
    }

    /// Get the raw components.
    pub const fn components(&self) -> &[u64; TAG_COMPONENTS] {
        &self.0
    }

    /// Check for the zero sentinel.
    pub const fn is_zero(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0 && self.0[3] == 0
    }

    /// Check that this Tag is not the zero sentinel.
    pub const fn is_set(&self) -> bool {
        !self.is_zero()
    }

    /// Build a Tag from 32 big-endian bytes.
    pub fn from_bytes(bytes: [u8; TAG_BYTES]) -> Self {
        let mut components = [0u64; TAG_COMPONENTS];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            components[i] = u64::from_be_bytes(word);
        }
        Self(components)
    }

    /// Serialize to 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; TAG_BYTES] {
        let mut out = [0u8; TAG_BYTES];
        for (i, c) in self.0.iter().enumerate() {
            out[i * 8..(i + 1) * 8].copy_from_slice(&c.to_be_bytes());
        }
        out
    }

    /// Render the canonical string form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse the canonical string form.
    pub fn from_hex(s: &str) -> Result<Self, TagError> {
        if s.len() != TAG_BYTES * 2 {
            return Err(TagError::invalid_tag_string(
                s,
                format!("expected {} hex characters, got {}", TAG_BYTES * 2, s.len()),
            ));
        }
        let mut bytes = [0u8; TAG_BYTES];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| TagError::invalid_tag_string(s, e.to_string()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Abbreviated form for logs: the first 16 hex characters.
    pub fn short(&self) -> String {
        format!("{:016x}", self.0[0])
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self.short())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Index<usize> for Tag {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.0[index]
    }
}

impl From<[u64; TAG_COMPONENTS]> for Tag {
    fn from(components: [u64; TAG_COMPONENTS]) -> Self {
        Self(components)
    }
}

impl From<[u8; TAG_BYTES]> for Tag {
    fn from(bytes: [u8; TAG_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for Tag {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; TAG_BYTES] = slice.try_into()?;
        Ok(Self::from_bytes(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tag_hex_roundtrip() {
        let tag = Tag::new(1, 2, 3, u64::MAX);
        let hex = tag.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(Tag::from_hex(&hex).unwrap(), tag);
    }

    #[test]
    fn test_tag_hex_is_big_endian() {
        let tag = Tag::new(0x0102030405060708, 0, 0, 0xff);
        let hex = tag.to_hex();
        assert!(hex.starts_with("0102030405060708"));
        assert!(hex.ends_with("00000000000000ff"));
    }

    #[test]
    fn test_tag_parse_accepts_upper_case() {
        let tag = Tag::new(0xabcdef, 0, 0, 0);
        let upper = tag.to_hex().to_uppercase();
        assert_eq!(upper.parse::<Tag>().unwrap(), tag);
    }

    #[test]
    fn test_tag_parse_rejects_bad_input() {
        assert!(matches!(
            Tag::from_hex("abc"),
            Err(TagError::InvalidTagString { .. })
        ));
        let bad = "g".repeat(64);
        assert!(matches!(
            Tag::from_hex(&bad),
            Err(TagError::InvalidTagString { .. })
        ));
    }

    #[test]
    fn test_tag_zero_sentinel() {
        assert!(Tag::ZERO.is_zero());
        assert!(Tag::default().is_zero());
        assert!(Tag::new(0, 0, 0, 1).is_set());
    }

    #[test]
    fn test_tag_order_most_significant_first() {
        let a = Tag::new(1, u64::MAX, u64::MAX, u64::MAX);
        let b = Tag::new(2, 0, 0, 0);
        assert!(a < b);
        assert!(Tag::new(5, 1, 0, 0) < Tag::new(5, 2, 0, 0));
    }

    #[test]
    fn test_tag_debug_and_index() {
        let tag = Tag::new(0xcd, 7, 0, 0);
        assert_eq!(format!("{:?}", tag), "Tag(00000000000000cd)");
        assert_eq!(tag[0], 0xcd);
        assert_eq!(tag[1], 7);
    }

    #[test]
    fn test_tag_bytes_roundtrip() {
        let tag = Tag::new(9, 8, 7, 6);
        let bytes = tag.to_bytes();
        assert_eq!(Tag::try_from(&bytes[..]).unwrap(), tag);
        assert!(Tag::try_from(&bytes[..31]).is_err());
    }

    #[test]
    fn test_tag_serde_json_components() {
        let tag = Tag::new(1, 2, 3, 4);
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "[1,2,3,4]");
        assert_eq!(serde_json::from_str::<Tag>(&json).unwrap(), tag);
    }

    proptest! {
        #[test]
        fn test_string_order_matches_tag_order(a in any::<[u64; 4]>(), b in any::<[u64; 4]>()) {
            let (ta, tb) = (Tag(a), Tag(b));
            prop_assert_eq!(ta.cmp(&tb), ta.to_hex().cmp(&tb.to_hex()));
        }

        #[test]
        fn test_display_parses_back(a in any::<[u64; 4]>()) {
            let tag = Tag(a);
            prop_assert_eq!(tag.to_string().parse::<Tag>().unwrap(), tag);
        }
    }
}
