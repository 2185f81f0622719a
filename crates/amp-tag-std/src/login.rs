//! Login handshake payloads.

use amp_tag_core::{Spec, StoreRecord};
use serde::{Deserialize, Serialize};

use crate::attrs::attr_spec;

/// Maximum length of a challenge or response hash, in bytes.
pub const MAX_HASH_LEN: usize = 64;

fn check_hash(hash: &[u8]) -> Result<(), String> {
    if hash.len() > MAX_HASH_LEN {
        return Err(format!("hash is {} bytes, max {}", hash.len(), MAX_HASH_LEN));
    }
    Ok(())
}

/// Challenge issued by a host to a connecting client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginChallenge {
    pub hash: Vec<u8>,
}

impl StoreRecord for LoginChallenge {
    fn spec() -> Spec {
        attr_spec().with("LoginChallenge")
    }

    fn check(&self) -> Result<(), String> {
        check_hash(&self.hash)
    }
}

/// The client's answer to a [`LoginChallenge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub hash: Vec<u8>,
}

impl StoreRecord for LoginResponse {
    fn spec() -> Spec {
        attr_spec().with("LoginResponse")
    }

    fn check(&self) -> Result<(), String> {
        check_hash(&self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use amp_tag_core::Value;

    #[test]
    fn test_specs_match_catalog_ids() {
        assert_eq!(LoginChallenge::spec().id(), attrs::login_challenge());
        assert_eq!(LoginResponse::spec().id(), attrs::login_response());
        assert_eq!(
            LoginChallenge::spec().id().to_hex(),
            "2852ec0b84745c2a7996938c121bfb397f44d4365785de7aaa0d9374c5b6bc02"
        );
    }

    #[test]
    fn test_oversized_hash_rejected() {
        let challenge = LoginChallenge {
            hash: vec![0u8; MAX_HASH_LEN + 1],
        };
        assert!(challenge.marshal_to_store(Vec::new()).unwrap_err().is_encoding());
    }

    #[test]
    fn test_response_hash_bound() {
        let at_limit = LoginResponse {
            hash: vec![7u8; MAX_HASH_LEN],
        };
        assert!(at_limit.marshal_to_store(Vec::new()).is_ok());

        let oversized = LoginResponse {
            hash: vec![7u8; MAX_HASH_LEN + 1],
        };
        assert!(oversized.marshal_to_store(Vec::new()).unwrap_err().is_encoding());
    }

    #[test]
    fn test_response_roundtrip() {
        let response = LoginResponse {
            hash: (0..64).rev().collect(),
        };
        let bytes = response.marshal_to_store(Vec::new()).unwrap();
        let mut out = LoginResponse::default();
        out.unmarshal_from_store(&bytes).unwrap();
        assert_eq!(out, response);
    }

    #[test]
    fn test_oversized_response_fails_decoding() {
        // Bytes from a peer that skipped the bound check.
        let bytes = amp_tag_core::marshal_cbor_to_store(
            &LoginResponse {
                hash: vec![1u8; MAX_HASH_LEN + 1],
            },
            Vec::new(),
        )
        .unwrap();
        let mut out = LoginResponse::default();
        assert!(out.unmarshal_from_store(&bytes).unwrap_err().is_decoding());
        assert_eq!(out, LoginResponse::default());
    }

    #[test]
    fn test_challenge_roundtrip() {
        let challenge = LoginChallenge {
            hash: (0..32).collect(),
        };
        let bytes = challenge.marshal_to_store(Vec::new()).unwrap();
        let mut out = LoginChallenge::default();
        out.unmarshal_from_store(&bytes).unwrap();
        assert_eq!(out, challenge);
    }
}
