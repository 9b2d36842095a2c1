use base64::engine::general_purpose::STANDARD;
use base64::{DecodeError, Engine as _};

use super::{CryptoError, Result};

/// Standard (non URL-safe) Base64 with padding.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard Base64, ignoring ASCII whitespace so line-wrapped keys load.
pub fn decode(input: &str) -> std::result::Result<Vec<u8>, DecodeError> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD.decode(compact)
}

/// Accept raw bytes as plaintext only if they are UTF-8.
pub fn require_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| CryptoError::EncodingFailure)
}
