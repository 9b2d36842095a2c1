use crate::crypto::CryptoError;
use crate::traits::random::SecureRandom;

/// The operating system's CSPRNG, read through `getrandom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeRandom;

impl NativeRandom {
    pub fn new() -> Self {
        Self
    }
}

impl SecureRandom for NativeRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        getrandom::getrandom(dest).map_err(|e| CryptoError::RandomUnavailable(e.to_string()))
    }
}
