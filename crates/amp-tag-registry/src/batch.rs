//! Batch decoding of attribute sets.
//!
//! A record carries many attributes. One unknown or corrupt attribute must
//! not take the rest of the record down with it, and must not vanish without
//! a trace either.

use amp_tag_core::{Tag, ValueError};

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::traits::{AttrCodec, DecodedAttrs};

impl Registry {
    /// Decode every `(Tag, bytes)` pair, sorting the outcome into decoded,
    /// skipped (unknown Tag) and failed (bad payload).
    pub fn decode_all<'a, I>(&self, pairs: I) -> DecodedAttrs
    where
        I: IntoIterator<Item = (Tag, &'a [u8])>,
    {
        decode_each(self, self.config().log_unknown, pairs)
    }
}

fn decode_each<'a, C, I>(codec: &C, log_unknown: bool, pairs: I) -> DecodedAttrs
where
    C: AttrCodec + ?Sized,
    I: IntoIterator<Item = (Tag, &'a [u8])>,
{
    let mut out = DecodedAttrs::default();

    for (id, bytes) in pairs {
        match codec.decode(&id, bytes) {
            Ok(value) => out.values.push((id, value)),
            Err(RegistryError::UnknownAttribute(_)) => {
                if log_unknown {
                    tracing::debug!(id = %id.short(), "skipping unknown attribute");
                }
                out.skipped.push(id);
            }
            Err(RegistryError::Value(e)) => {
                tracing::warn!(id = %id.short(), error = %e, "dropping malformed attribute");
                out.failed.push((id, e));
            }
            Err(e @ RegistryError::DuplicateRegistration { .. })
            | Err(e @ RegistryError::SpecMismatch { .. }) => {
                tracing::warn!(id = %id.short(), error = %e, "dropping undecodable attribute");
                out.failed.push((id, ValueError::Decoding(e.to_string())));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use amp_tag_core::{Spec, StoreRecord};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        body: String,
    }

    impl StoreRecord for Note {
        fn spec() -> Spec {
            Spec::root().with("batch-test").with("note")
        }
    }

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct Score {
        points: u64,
    }

    impl StoreRecord for Score {
        fn spec() -> Spec {
            Spec::root().with("batch-test").with("score")
        }
    }

    #[test]
    fn test_decode_all_sorts_outcomes() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let registry = Registry::default();
        registry.register_type::<Note>().unwrap();
        registry.register_type::<Score>().unwrap();

        let note = registry.encode(&Note { body: "hi".into() }).unwrap();
        let score = registry.encode(&Score { points: 12 }).unwrap();
        let unknown = Spec::root().with("batch-test").with("from-the-future").id();

        let pairs: Vec<(Tag, &[u8])> = vec![
            (note.id, &note.bytes[..]),
            (unknown, &[0xa0][..]),
            (score.id, &score.bytes[..1]),
        ];
        let decoded = registry.decode_all(pairs);

        assert_eq!(decoded.values.len(), 1);
        assert_eq!(decoded.get::<Note>(), Some(&Note { body: "hi".into() }));
        assert_eq!(decoded.skipped, vec![unknown]);
        assert_eq!(decoded.failed.len(), 1);
        assert_eq!(decoded.failed[0].0, score.id);
        assert!(decoded.failed[0].1.is_decoding());
        assert!(!decoded.is_clean());
    }

    /// Codec whose decode reports a registration conflict for every Tag.
    struct ConflictedCodec;

    impl AttrCodec for ConflictedCodec {
        fn lookup(&self, _id: &Tag) -> Option<crate::traits::Factory> {
            None
        }

        fn decode(&self, id: &Tag, _bytes: &[u8]) -> crate::Result<Box<dyn amp_tag_core::Value>> {
            Err(RegistryError::DuplicateRegistration {
                id: *id,
                spec: "batch-test.note".into(),
                existing: "Note",
                attempted: "Score",
            })
        }
    }

    #[test]
    fn test_every_attribute_is_accounted_for() {
        let id = Note::spec().id();
        let decoded = decode_each(&ConflictedCodec, true, [(id, &[0xa0u8][..])]);
        assert!(decoded.values.is_empty());
        assert!(decoded.skipped.is_empty());
        assert_eq!(decoded.failed.len(), 1);
        assert_eq!(decoded.failed[0].0, id);
        assert!(decoded.failed[0].1.is_decoding());
    }

    #[test]
    fn test_decode_all_clean() {
        let registry = Registry::default();
        registry.register_type::<Score>().unwrap();
        let score = registry.encode(&Score { points: 1 }).unwrap();

        let decoded = registry.decode_all([(score.id, &score.bytes[..])]);
        assert!(decoded.is_clean());
        assert_eq!(decoded.get::<Score>(), Some(&Score { points: 1 }));
    }
}
