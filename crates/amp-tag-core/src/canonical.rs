//! The store codec: CBOR via serde.
//!
//! Payload bytes are a single CBOR data item produced by `ciborium` from the
//! payload's serde representation:
//! - Struct fields are written as a map in declaration order, so the same
//!   value always produces the same bytes
//! - Definite lengths only
//! - Decoding rejects truncated input and any trailing bytes
//!
//! Payloads are appended to a caller-provided buffer so several attributes
//! can be packed into one allocation.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ValueError;

/// Append the CBOR encoding of `value` to `buf`.
pub fn marshal_cbor_to_store<T: Serialize + ?Sized>(
    value: &T,
    mut buf: Vec<u8>,
) -> Result<Vec<u8>, ValueError> {
    ciborium::into_writer(value, &mut buf).map_err(|e| ValueError::Encoding(e.to_string()))?;
    Ok(buf)
}

/// Decode exactly one CBOR item from `bytes`.
pub fn unmarshal_cbor_from_store<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ValueError> {
    if bytes.is_empty() {
        return Err(ValueError::Decoding("empty input".into()));
    }

    let mut reader = bytes;
    let value: T =
        ciborium::from_reader(&mut reader).map_err(|e| ValueError::Decoding(e.to_string()))?;

    if !reader.is_empty() {
        return Err(ValueError::Decoding(format!(
            "{} trailing bytes after payload",
            reader.len()
        )));
    }
    Ok(value)
}
