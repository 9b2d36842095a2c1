pub mod encoding;
pub mod keys;
pub mod pbkdf2;
pub mod aes_cbc;
pub mod rsa_keys;
pub mod rsa_oaep;

#[cfg(test)]
mod test_keys;

use thiserror::Error;

/// Every failure an encrypt, decrypt, derive or load call can return.
///
/// Padding, MAC-less tampering and wrong-key causes all collapse into
/// `DecryptionFailure`, which carries no detail.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Key parse failed: {0}")]
    KeyParseFailure(String),
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailure(String),
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),
    #[error("Cipher initialization failed: {0}")]
    CipherInitFailure(String),
    #[error("Encryption failed: {0}")]
    EncryptionFailure(String),
    #[error("Decryption failed")]
    DecryptionFailure,
    #[error("Plaintext too large: maximum {max} bytes, got {got}")]
    PlaintextTooLarge { max: usize, got: usize },
    #[error("Failed to read key file {path}: {reason}")]
    FileReadFailure { path: String, reason: String },
    #[error("Failed to write key file {path}: {reason}")]
    FileWriteFailure { path: String, reason: String },
    #[error("Input is not valid UTF-8")]
    EncodingFailure,
    #[error("Secure random source unavailable: {0}")]
    RandomUnavailable(String),
}

impl CryptoError {
    /// Stable numeric code for callers that report failures as integers.
    pub fn code(&self) -> i32 {
        match self {
            CryptoError::KeyParseFailure(_) => -2001,
            CryptoError::KeyDerivationFailure(_) => -2002,
            CryptoError::UnsupportedAlgorithm(_) => -2003,
            CryptoError::InvalidKeyMaterial(_) => -2004,
            CryptoError::CipherInitFailure(_) => -2005,
            CryptoError::EncryptionFailure(_) => -2006,
            CryptoError::DecryptionFailure => -2007,
            CryptoError::PlaintextTooLarge { .. } => -2008,
            CryptoError::FileReadFailure { .. } => -2009,
            CryptoError::EncodingFailure => -2010,
            CryptoError::FileWriteFailure { .. } => -2011,
            CryptoError::RandomUnavailable(_) => -2012,
        }
    }
}

pub type Result<T> = std::result::Result<T, CryptoError>;
