use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, InvalidLength, KeyIvInit};
use tracing::debug;

use super::encoding;
use super::keys::SymmetricKey;
use super::pbkdf2::derive_aes_key;
use super::{CryptoError, Result};
use crate::constants::{AES_BLOCK_LEN, LEGACY_IV};
use crate::platform::NativeRandom;
use crate::traits::random::SecureRandom;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// How the CBC initialization vector is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IvMode {
    /// Fresh random IV per call, carried as the first 16 bytes of the output.
    #[default]
    Random,
    /// One constant IV for every message, with nothing prepended.
    ///
    /// Only for reading and writing data shared with the legacy service:
    /// equal plaintext prefixes under one key produce equal ciphertext prefixes.
    LegacyFixed([u8; AES_BLOCK_LEN]),
}

impl IvMode {
    /// Legacy mode with the service's historical IV constant.
    pub fn legacy() -> Self {
        IvMode::LegacyFixed(LEGACY_IV)
    }

    fn label(&self) -> &'static str {
        match self {
            IvMode::Random => "random",
            IvMode::LegacyFixed(_) => "legacy-fixed",
        }
    }
}

/// Encrypt raw bytes with AES-CBC/PKCS7. In `Random` mode the result is `iv || ciphertext`.
pub fn aes_cbc_encrypt_bytes(
    plaintext: &[u8],
    key: &SymmetricKey,
    mode: IvMode,
    rng: &dyn SecureRandom,
) -> Result<Vec<u8>> {
    match mode {
        IvMode::Random => {
            let iv: [u8; AES_BLOCK_LEN] = rng.array()?;

            let ciphertext = cbc_encrypt(key.as_bytes(), &iv, plaintext)?;
            let mut output = Vec::with_capacity(AES_BLOCK_LEN + ciphertext.len());
            output.extend_from_slice(&iv);
            output.extend_from_slice(&ciphertext);
            Ok(output)
        }
        IvMode::LegacyFixed(iv) => cbc_encrypt(key.as_bytes(), &iv, plaintext),
    }
}

/// Inverse of `aes_cbc_encrypt_bytes`. Any malformed input or padding error is `DecryptionFailure`.
pub fn aes_cbc_decrypt_bytes(data: &[u8], key: &SymmetricKey, mode: IvMode) -> Result<Vec<u8>> {
    let (iv, ciphertext) = match mode {
        IvMode::Random => {
            if data.len() < AES_BLOCK_LEN {
                return Err(CryptoError::DecryptionFailure);
            }
            let (prefix, rest) = data.split_at(AES_BLOCK_LEN);
            let mut iv = [0u8; AES_BLOCK_LEN];
            iv.copy_from_slice(prefix);
            (iv, rest)
        }
        IvMode::LegacyFixed(iv) => (iv, data),
    };

    cbc_decrypt(key.as_bytes(), &iv, ciphertext)
}

/// Encrypt a string and return standard Base64.
pub fn aes_cbc_encrypt(plaintext: &str, key: &SymmetricKey, mode: IvMode) -> Result<String> {
    aes_cbc_encrypt_with_rng(plaintext, key, mode, &NativeRandom::new())
}

pub fn aes_cbc_encrypt_with_rng(
    plaintext: &str,
    key: &SymmetricKey,
    mode: IvMode,
    rng: &dyn SecureRandom,
) -> Result<String> {
    let output = aes_cbc_encrypt_bytes(plaintext.as_bytes(), key, mode, rng)?;

    debug!(
        iv_mode = mode.label(),
        key_bits = key.bits(),
        plaintext_len = plaintext.len(),
        "AES-CBC encrypt"
    );

    Ok(encoding::encode(&output))
}

/// Decrypt a Base64 string produced by `aes_cbc_encrypt` under the same key and mode.
pub fn aes_cbc_decrypt(ciphertext: &str, key: &SymmetricKey, mode: IvMode) -> Result<String> {
    let data = encoding::decode(ciphertext).map_err(|_| CryptoError::DecryptionFailure)?;

    let plaintext = aes_cbc_decrypt_bytes(&data, key, mode).inspect_err(|_| {
        debug!(iv_mode = mode.label(), key_bits = key.bits(), "AES-CBC decrypt rejected");
    })?;

    debug!(
        iv_mode = mode.label(),
        key_bits = key.bits(),
        ciphertext_len = data.len(),
        "AES-CBC decrypt"
    );

    // Not distinguished from a padding failure: both mean wrong key or tampering.
    String::from_utf8(plaintext).map_err(|_| CryptoError::DecryptionFailure)
}

/// Derive a key from `password` and `salt`, then encrypt.
pub fn encrypt_with_password(
    plaintext: &str,
    password: &str,
    salt: &[u8],
    mode: IvMode,
) -> Result<String> {
    let key = derive_aes_key(password, salt)?;
    aes_cbc_encrypt(plaintext, &key, mode)
}

/// Derive a key from `password` and `salt`, then decrypt.
pub fn decrypt_with_password(
    ciphertext: &str,
    password: &str,
    salt: &[u8],
    mode: IvMode,
) -> Result<String> {
    let key = derive_aes_key(password, salt)?;
    aes_cbc_decrypt(ciphertext, &key, mode)
}

fn cbc_encrypt(key: &[u8], iv: &[u8; AES_BLOCK_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let ciphertext = match key.len() {
        16 => Aes128CbcEnc::new_from_slices(key, iv)
            .map_err(init_failure)?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        24 => Aes192CbcEnc::new_from_slices(key, iv)
            .map_err(init_failure)?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        32 => Aes256CbcEnc::new_from_slices(key, iv)
            .map_err(init_failure)?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        got => return Err(invalid_key_length(got)),
    };

    Ok(ciphertext)
}

fn cbc_decrypt(key: &[u8], iv: &[u8; AES_BLOCK_LEN], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_LEN != 0 {
        return Err(CryptoError::DecryptionFailure);
    }

    let plaintext = match key.len() {
        16 => Aes128CbcDec::new_from_slices(key, iv)
            .map_err(init_failure)?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        24 => Aes192CbcDec::new_from_slices(key, iv)
            .map_err(init_failure)?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        32 => Aes256CbcDec::new_from_slices(key, iv)
            .map_err(init_failure)?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        got => return Err(invalid_key_length(got)),
    };

    plaintext.map_err(|_| CryptoError::DecryptionFailure)
}

fn init_failure(e: InvalidLength) -> CryptoError {
    CryptoError::CipherInitFailure(e.to_string())
}

fn invalid_key_length(got: usize) -> CryptoError {
    CryptoError::InvalidKeyMaterial(format!("AES key must be 16, 24 or 32 bytes, got {got}"))
}
