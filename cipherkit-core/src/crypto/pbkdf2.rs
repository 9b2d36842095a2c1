use hmac::Hmac;
use sha2::Sha256;
use tracing::debug;
use zeroize::Zeroizing;

use super::keys::SymmetricKey;
use super::{CryptoError, Result};
use crate::constants::{DERIVED_KEY_LEN, LEGACY_IV, PBKDF2_ITERATIONS, PBKDF2_SALT_LEN};
use crate::traits::random::SecureRandom;

/// Derive a 128-bit AES key from a password and salt using PBKDF2-HMAC-SHA256.
///
/// Deterministic: the same password and salt always give the same key, so
/// independent encrypt and decrypt calls agree without exchanging the key.
pub fn derive_aes_key(password: &str, salt: &[u8]) -> Result<SymmetricKey> {
    if password.is_empty() {
        return Err(CryptoError::KeyDerivationFailure(
            "password must not be empty".into(),
        ));
    }
    if salt.is_empty() {
        return Err(CryptoError::KeyDerivationFailure(
            "salt must not be empty".into(),
        ));
    }

    let mut output = Zeroizing::new([0u8; DERIVED_KEY_LEN]);
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut output[..])
        .map_err(|e| CryptoError::KeyDerivationFailure(e.to_string()))?;

    debug!(
        salt_len = salt.len(),
        iterations = PBKDF2_ITERATIONS,
        "derived AES key with PBKDF2-HMAC-SHA256"
    );

    SymmetricKey::from_bytes(&output[..])
}

/// Derive with the legacy salt, which is the same constant as the legacy IV.
///
/// Keys derived this way match those produced by the old service for the same
/// password; new data should use a per-record salt from `generate_salt`.
pub fn derive_aes_key_legacy(password: &str) -> Result<SymmetricKey> {
    derive_aes_key(password, &LEGACY_IV)
}

/// Fresh random salt of `PBKDF2_SALT_LEN` bytes.
pub fn generate_salt(rng: &dyn SecureRandom) -> Result<[u8; PBKDF2_SALT_LEN]> {
    rng.array()
}
