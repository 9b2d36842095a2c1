use std::fmt;

use zeroize::Zeroizing;

use super::{CryptoError, Result};
use crate::constants::AES_KEY_LENGTHS;

/// AES key bytes, either derived from a password or supplied pre-shared.
///
/// The length is checked once at construction; bytes are wiped on drop.
#[derive(Clone)]
pub struct SymmetricKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl SymmetricKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if !AES_KEY_LENGTHS.contains(&bytes.len()) {
            return Err(CryptoError::InvalidKeyMaterial(format!(
                "AES key must be 16, 24 or 32 bytes, got {}",
                bytes.len()
            )));
        }

        Ok(Self {
            bytes: Zeroizing::new(bytes.to_vec()),
        })
    }

    /// Use the UTF-8 bytes of a shared secret string directly as the key.
    pub fn from_pre_shared(key: &str) -> Result<Self> {
        Self::from_bytes(key.as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bits(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn algorithm(&self) -> &'static str {
        "AES"
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("algorithm", &self.algorithm())
            .field("bits", &self.bits())
            .finish_non_exhaustive()
    }
}
