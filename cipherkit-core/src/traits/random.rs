use crate::crypto::CryptoError;

/// CSPRNG seam for IVs and salts. Tests plug in fixed or failing sources.
pub trait SecureRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

impl dyn SecureRandom + '_ {
    /// Draw exactly `N` bytes, e.g. one CBC IV or one PBKDF2 salt.
    pub fn array<const N: usize>(&self) -> Result<[u8; N], CryptoError> {
        let mut out = [0u8; N];
        self.fill_bytes(&mut out)?;
        Ok(out)
    }
}
