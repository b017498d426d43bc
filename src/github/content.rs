// src/github/content.rs
// =============================================================================
// Decoding the "content" field of the contents API.
//
// GitHub sends file bodies as standard base64, broken into lines of 60
// characters. The base64 crate is strict and rejects the newlines, so all
// ASCII whitespace is dropped before decoding.
// =============================================================================

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{HarvestError, Result};

/// Decodes a base64 payload into raw bytes
///
/// `path` is only used for the error message.
pub fn decode_content(encoded: &str, path: &str) -> Result<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    STANDARD
        .decode(compact.as_bytes())
        .map_err(|source| HarvestError::Decode {
            path: path.to_string(),
            source,
        })
}
