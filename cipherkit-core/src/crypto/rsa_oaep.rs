use rand_core::{CryptoRngCore, OsRng};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::Sha256;
use tracing::debug;

use super::encoding;
use super::rsa_keys::{load_private_key, load_public_key, KeySource};
use super::{CryptoError, Result};
use crate::constants::{OAEP_HASH_LEN, RSA_KEY_BITS};

/// Hash behind the OAEP mask generation function.
///
/// The label hash is SHA-256 and the label is empty in both cases, so the
/// plaintext bound does not depend on this choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OaepMgf {
    /// MGF1-SHA-1, what JCE providers use for `OAEPWithSHA-256AndMGF1Padding`.
    #[default]
    Sha1,
    /// MGF1-SHA-256, for peers that set the mask hash to the digest.
    Sha256,
}

impl OaepMgf {
    fn padding(self) -> Oaep {
        match self {
            OaepMgf::Sha1 => Oaep::new_with_mgf_hash::<Sha256, Sha1>(),
            OaepMgf::Sha256 => Oaep::new::<Sha256>(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            OaepMgf::Sha1 => "mgf1-sha1",
            OaepMgf::Sha256 => "mgf1-sha256",
        }
    }
}

/// Largest plaintext OAEP(SHA-256) can carry under `key`.
pub fn max_plaintext_len(key: &RsaPublicKey) -> usize {
    key.size().saturating_sub(2 * OAEP_HASH_LEN + 2)
}

fn check_modulus(modulus_bytes: usize) -> Result<()> {
    if modulus_bytes * 8 < RSA_KEY_BITS {
        return Err(CryptoError::InvalidKeyMaterial(format!(
            "RSA modulus must be at least {RSA_KEY_BITS} bits, got {}",
            modulus_bytes * 8
        )));
    }
    Ok(())
}

pub fn rsa_oaep_encrypt_bytes<R: CryptoRngCore>(
    plaintext: &[u8],
    key: &RsaPublicKey,
    mgf: OaepMgf,
    rng: &mut R,
) -> Result<Vec<u8>> {
    check_modulus(key.size())?;

    let max = max_plaintext_len(key);
    if plaintext.len() > max {
        return Err(CryptoError::PlaintextTooLarge {
            max,
            got: plaintext.len(),
        });
    }

    key.encrypt(rng, mgf.padding(), plaintext)
        .map_err(|e| CryptoError::EncryptionFailure(e.to_string()))
}

/// Every OAEP rejection maps to the same `DecryptionFailure`.
pub fn rsa_oaep_decrypt_bytes(
    ciphertext: &[u8],
    key: &RsaPrivateKey,
    mgf: OaepMgf,
) -> Result<Vec<u8>> {
    check_modulus(key.size())?;

    if ciphertext.len() != key.size() {
        return Err(CryptoError::DecryptionFailure);
    }

    key.decrypt(mgf.padding(), ciphertext)
        .map_err(|_| CryptoError::DecryptionFailure)
}

/// Encrypt a UTF-8 string with the default MGF1-SHA-1 padding and return standard Base64.
pub fn rsa_oaep_encrypt(plaintext: &str, key: &RsaPublicKey) -> Result<String> {
    rsa_oaep_encrypt_mgf(plaintext, key, OaepMgf::default())
}

pub fn rsa_oaep_decrypt(ciphertext: &str, key: &RsaPrivateKey) -> Result<String> {
    rsa_oaep_decrypt_mgf(ciphertext, key, OaepMgf::default())
}

pub fn rsa_oaep_encrypt_mgf(plaintext: &str, key: &RsaPublicKey, mgf: OaepMgf) -> Result<String> {
    let ciphertext = rsa_oaep_encrypt_bytes(plaintext.as_bytes(), key, mgf, &mut OsRng)?;

    debug!(
        mgf = mgf.label(),
        modulus_bits = key.size() * 8,
        plaintext_len = plaintext.len(),
        "RSA-OAEP encrypt"
    );

    Ok(encoding::encode(&ciphertext))
}

pub fn rsa_oaep_decrypt_mgf(
    ciphertext: &str,
    key: &RsaPrivateKey,
    mgf: OaepMgf,
) -> Result<String> {
    let data = encoding::decode(ciphertext).map_err(|_| CryptoError::DecryptionFailure)?;
    let plaintext = rsa_oaep_decrypt_bytes(&data, key, mgf).inspect_err(|_| {
        debug!(mgf = mgf.label(), modulus_bits = key.size() * 8, "RSA-OAEP decrypt rejected");
    })?;

    debug!(mgf = mgf.label(), modulus_bits = key.size() * 8, "RSA-OAEP decrypt");

    // OAEP already authenticated the padding, so this only reflects what the sender encrypted.
    encoding::require_utf8(plaintext)
}

/// Load the public key from `source`, then encrypt.
pub fn rsa_oaep_encrypt_with(
    plaintext: &str,
    source: KeySource<'_>,
    mgf: OaepMgf,
) -> Result<String> {
    let key = load_public_key(source)?;
    rsa_oaep_encrypt_mgf(plaintext, &key, mgf)
}

/// Load the private key from `source`, then decrypt.
pub fn rsa_oaep_decrypt_with(
    ciphertext: &str,
    source: KeySource<'_>,
    mgf: OaepMgf,
) -> Result<String> {
    let key = load_private_key(source)?;
    rsa_oaep_decrypt_mgf(ciphertext, &key, mgf)
}
