// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded-length product references for size-limited callback payloads.
//!
//! A [`Token`] is `prefix + "_" + payload` and never exceeds
//! [`CALLBACK_DATA_LIMIT`] bytes. The payload is the product handle itself
//! when it fits, otherwise the first eight hex characters of its SHA-1.
//!
//! Digests can collide. Resolution scans candidates in order and returns the
//! first match, so a collision is only stable within one catalog snapshot.

use posy_core::{CALLBACK_DATA_LIMIT, Product};
use sha1::{Digest, Sha1};

/// Number of hex characters kept from the SHA-1 digest.
pub const DIGEST_LEN: usize = 8;

/// A callback-safe reference to a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    value: String,
    prefix_len: usize,
}

impl Token {
    /// The full payload, `prefix_payload`.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The part after the separator: a handle or a digest.
    pub fn payload(&self) -> &str {
        &self.value[self.prefix_len + 1..]
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// First [`DIGEST_LEN`] lowercase hex characters of SHA-1(`identifier`).
pub fn digest(identifier: &str) -> String {
    let hash = Sha1::digest(identifier.as_bytes());
    let mut hex = hex::encode(hash);
    hex.truncate(DIGEST_LEN);
    hex
}

/// Whether `payload` has the shape of a digest produced by [`digest`].
pub fn looks_like_digest(payload: &str) -> bool {
    payload.len() == DIGEST_LEN && payload.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Encodes `identifier` under `prefix`, hashing it when it would not fit.
pub fn encode(prefix: &str, identifier: &str) -> Token {
    let budget = CALLBACK_DATA_LIMIT.saturating_sub(prefix.len() + 1);
    let payload = if identifier.len() <= budget {
        identifier.to_string()
    } else {
        digest(identifier)
    };
    Token {
        value: format!("{prefix}_{payload}"),
        prefix_len: prefix.len(),
    }
}

/// Finds the product a token payload refers to.
///
/// Digest-shaped payloads are matched against each candidate's digest, first
/// match wins. Anything else, and a digest-shaped payload with no digest
/// match, is compared against handles verbatim.
pub fn resolve<'a>(payload: &str, candidates: &'a [Product]) -> Option<&'a Product> {
    if looks_like_digest(payload) {
        let by_digest = candidates
            .iter()
            .find(|p| digest(&p.handle).eq_ignore_ascii_case(payload));
        if by_digest.is_some() {
            return by_digest;
        }
    }
    candidates.iter().find(|p| p.handle == payload)
}
