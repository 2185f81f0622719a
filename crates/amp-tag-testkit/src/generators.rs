//! Proptest generators for property-based testing.

use proptest::prelude::*;

use amp_tag_core::Tag;
use amp_tag_std::{fsinfo, login, FsInfo, LoginChallenge, LoginResponse, Position};

/// Generate a random Tag.
pub fn tag() -> impl Strategy<Value = Tag> {
    any::<[u64; 4]>().prop_map(Tag::from_components)
}

/// Generate a canonical name segment.
pub fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,23}".prop_map(String::from)
}

/// Generate a dotted path of 1 to 4 segments.
pub fn dotted_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..=4).prop_map(|segments| segments.join("."))
}

/// Generate a finite Position.
pub fn position() -> impl Strategy<Value = Position> {
    (-1e9f64..1e9, -1e9f64..1e9, -1e9f64..1e9).prop_map(|(x, y, z)| Position::new(x, y, z))
}

/// Generate a valid FsInfo.
pub fn fs_info() -> impl Strategy<Value = FsInfo> {
    (
        "(file|dir|link)",
        "[a-z]{1,10}/[a-z0-9.+-]{1,20}",
        prop::collection::vec(any::<char>(), 0..40),
        any::<bool>(),
        any::<u32>(),
        0i64..=i64::MAX,
        0i64..=4_102_444_800_000_000i64,
        0i64..=4_102_444_800_000_000i64,
    )
        .prop_map(
            |(item_type, mime_type, name, is_dir, mode, byte_size, created_at, modified_at)| {
                let mut name: String = name.into_iter().collect();
                while name.len() > fsinfo::MAX_NAME_LEN {
                    name.pop();
                }
                FsInfo {
                    item_type,
                    mime_type,
                    name,
                    is_dir,
                    mode,
                    byte_size,
                    created_at,
                    modified_at,
                }
            },
        )
}

/// Generate a valid LoginChallenge.
pub fn login_challenge() -> impl Strategy<Value = LoginChallenge> {
    prop::collection::vec(any::<u8>(), 0..=login::MAX_HASH_LEN)
        .prop_map(|hash| LoginChallenge { hash })
}

/// Generate a valid LoginResponse.
pub fn login_response() -> impl Strategy<Value = LoginResponse> {
    prop::collection::vec(any::<u8>(), 0..=login::MAX_HASH_LEN)
        .prop_map(|hash| LoginResponse { hash })
}

#[cfg(test)]
mod tests {
    use super::*;
    use amp_tag_core::{Spec, StoreRecord, Value};
    use amp_tag_registry::{AttrCodec, Registry};

    fn std_registry() -> Registry {
        let registry = Registry::default();
        amp_tag_std::register_std(&registry).unwrap();
        registry
    }

    proptest! {
        #[test]
        fn test_derivation_deterministic(path in dotted_path()) {
            let a = Spec::root().with(&path);
            let b = Spec::root().with(&path);
            prop_assert!(Spec::ptr_eq(&a, &b));
            prop_assert_eq!(a.id(), Spec::root().with(&path.to_uppercase()).id());
        }

        #[test]
        fn test_sibling_isolation(parent in dotted_path(), n1 in segment(), n2 in segment()) {
            prop_assume!(n1 != n2);
            let p = Spec::root().with(&parent);
            prop_assert_ne!(p.with(&n1).id(), p.with(&n2).id());
        }

        #[test]
        fn test_tag_string_roundtrip(t in tag()) {
            prop_assert_eq!(t.to_hex().parse::<Tag>().unwrap(), t);
        }

        #[test]
        fn test_position_roundtrip_via_registry(p in position()) {
            let registry = std_registry();
            let attr = registry.encode(&p).unwrap();
            let decoded = registry.decode(&attr.id, &attr.bytes).unwrap();
            prop_assert_eq!(decoded.downcast_ref::<Position>(), Some(&p));
        }

        #[test]
        fn test_fs_info_roundtrip_via_registry(info in fs_info()) {
            let registry = std_registry();
            let attr = registry.encode(&info).unwrap();
            prop_assert_eq!(attr.id, FsInfo::spec().id());
            let decoded = registry.decode(&attr.id, &attr.bytes).unwrap();
            prop_assert_eq!(decoded.downcast_ref::<FsInfo>(), Some(&info));
        }

        #[test]
        fn test_login_challenge_roundtrip(c in login_challenge()) {
            let bytes = c.marshal_to_store(Vec::new()).unwrap();
            let mut out = LoginChallenge::default();
            out.unmarshal_from_store(&bytes).unwrap();
            prop_assert_eq!(out, c);
        }

        #[test]
        fn test_login_response_roundtrip_via_registry(r in login_response()) {
            let registry = std_registry();
            let attr = registry.encode(&r).unwrap();
            prop_assert_eq!(attr.id, LoginResponse::spec().id());
            let decoded = registry.decode(&attr.id, &attr.bytes).unwrap();
            prop_assert_eq!(decoded.downcast_ref::<LoginResponse>(), Some(&r));
        }

        #[test]
        fn test_oversized_login_response_rejected(extra in 1usize..32) {
            let r = LoginResponse { hash: vec![0u8; login::MAX_HASH_LEN + extra] };
            let err = std_registry().encode(&r).unwrap_err();
            prop_assert!(matches!(err, amp_tag_registry::RegistryError::Value(ref e) if e.is_encoding()));
        }

        #[test]
        fn test_decode_unregistered_never_panics(id in tag(), bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let registry = Registry::default();
            let err = registry.decode(&id, &bytes).unwrap_err();
            prop_assert!(err.is_unknown());
        }

        #[test]
        fn test_decode_garbage_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let registry = std_registry();
            let before = registry.len();
            let _ = registry.decode(&FsInfo::spec().id(), &bytes);
            prop_assert_eq!(registry.len(), before);
        }
    }
}
