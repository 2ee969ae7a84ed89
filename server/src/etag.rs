//! Cache validation tokens.

use serde::Serialize;
use sha1::{Digest, Sha1};

/// Number of digest bytes kept in a token.
const TOKEN_BYTES: usize = 8;

/// Token for an already serialized body, e.g. `"a1b2c3d4e5f60718"` (quotes included).
pub fn token_for_bytes(body: &[u8]) -> String {
    let digest = Sha1::digest(body);
    format!("\"{}\"", hex::encode(&digest[..TOKEN_BYTES]))
}

/// A JSON body together with its token, both taken from the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedBody {
    pub body: Vec<u8>,
    pub etag: String,
}

impl TaggedBody {
    /// Serializes `payload` to JSON and hashes the result.
    ///
    /// Map-typed fields must have a stable iteration order (the payloads here
    /// use `BTreeMap`) for the token to be reproducible.
    pub fn new<T: Serialize + ?Sized>(payload: &T) -> serde_json::Result<Self> {
        let body = serde_json::to_vec(payload)?;
        let etag = token_for_bytes(&body);
        Ok(Self { body, etag })
    }
}

/// Token of `payload` without keeping the body.
#[cfg(test)]
pub fn compute_token<T: Serialize + ?Sized>(payload: &T) -> serde_json::Result<String> {
    TaggedBody::new(payload).map(|tagged| tagged.etag)
}
