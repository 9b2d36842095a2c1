use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rand_core::{CryptoRngCore, OsRng};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;
use zeroize::Zeroizing;

use super::encoding;
use super::{CryptoError, Result};
use crate::constants::{PRIVATE_KEY_FILE, PUBLIC_KEY_FILE, RSA_KEY_BITS};

/// Where serialized key material comes from.
///
/// `Base64` wraps the DER encoding; `File` holds the raw DER bytes.
#[derive(Debug, Clone, Copy)]
pub enum KeySource<'a> {
    Base64(&'a str),
    File(&'a Path),
}

impl KeySource<'_> {
    fn kind(&self) -> &'static str {
        match self {
            KeySource::Base64(_) => "base64",
            KeySource::File(_) => "file",
        }
    }

    fn read_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        match self {
            KeySource::Base64(text) => encoding::decode(text)
                .map(Zeroizing::new)
                .map_err(|e| CryptoError::KeyParseFailure(format!("key is not valid Base64: {e}"))),
            KeySource::File(path) => fs::read(path).map(Zeroizing::new).map_err(|e| {
                CryptoError::FileReadFailure {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            }),
        }
    }
}

/// RSA public/private key pair.
#[derive(Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaKeyPair {
    pub fn from_private_key(private_key: RsaPrivateKey) -> Self {
        Self {
            public_key: RsaPublicKey::from(&private_key),
            private_key,
        }
    }

    pub fn modulus_bits(&self) -> usize {
        self.public_key.size() * 8
    }

    /// Write `public.der` (X.509) and `private.der` (PKCS#8) into `dir`.
    ///
    /// The directory is created if missing. On Unix the private key file is
    /// restricted to the owner.
    pub fn write_der_files(&self, dir: &Path) -> Result<(PathBuf, PathBuf)> {
        fs::create_dir_all(dir).map_err(|e| write_failure(dir, e))?;

        let public_path = dir.join(PUBLIC_KEY_FILE);
        let private_path = dir.join(PRIVATE_KEY_FILE);

        fs::write(&public_path, public_key_der(&self.public_key)?)
            .map_err(|e| write_failure(&public_path, e))?;
        fs::write(&private_path, private_key_der(&self.private_key)?.as_slice())
            .map_err(|e| write_failure(&private_path, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&private_path, fs::Permissions::from_mode(0o600))
                .map_err(|e| write_failure(&private_path, e))?;
        }

        debug!(dir = %dir.display(), "wrote RSA key pair");
        Ok((public_path, private_path))
    }
}

impl fmt::Debug for RsaKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaKeyPair")
            .field("modulus_bits", &self.modulus_bits())
            .finish_non_exhaustive()
    }
}

/// Generate a 2048-bit RSA key pair from the OS CSPRNG.
pub fn generate_rsa_keypair() -> Result<RsaKeyPair> {
    generate_rsa_keypair_with(&mut OsRng)
}

pub fn generate_rsa_keypair_with<R: CryptoRngCore>(rng: &mut R) -> Result<RsaKeyPair> {
    let private_key = RsaPrivateKey::new(rng, RSA_KEY_BITS).map_err(|e| {
        CryptoError::UnsupportedAlgorithm(format!("RSA-{RSA_KEY_BITS} key generation failed: {e}"))
    })?;

    debug!(modulus_bits = RSA_KEY_BITS, "generated RSA key pair");
    Ok(RsaKeyPair::from_private_key(private_key))
}

/// Parse an X.509 SubjectPublicKeyInfo RSA public key.
pub fn load_public_key(source: KeySource<'_>) -> Result<RsaPublicKey> {
    let der = source.read_der()?;
    let key = RsaPublicKey::from_public_key_der(&der)
        .map_err(|e| CryptoError::KeyParseFailure(format!("not an X.509 RSA public key: {e}")))?;

    debug!(source = source.kind(), modulus_bits = key.size() * 8, "loaded RSA public key");
    Ok(key)
}

/// Parse a PKCS#8 RSA private key.
pub fn load_private_key(source: KeySource<'_>) -> Result<RsaPrivateKey> {
    let der = source.read_der()?;
    let key = RsaPrivateKey::from_pkcs8_der(&der)
        .map_err(|e| CryptoError::KeyParseFailure(format!("not a PKCS#8 RSA private key: {e}")))?;

    debug!(source = source.kind(), modulus_bits = key.size() * 8, "loaded RSA private key");
    Ok(key)
}

pub fn public_key_der(key: &RsaPublicKey) -> Result<Vec<u8>> {
    key.to_public_key_der()
        .map(|doc| doc.as_bytes().to_vec())
        .map_err(|e| CryptoError::InvalidKeyMaterial(format!("cannot encode public key: {e}")))
}

pub fn private_key_der(key: &RsaPrivateKey) -> Result<Zeroizing<Vec<u8>>> {
    key.to_pkcs8_der()
        .map(|doc| Zeroizing::new(doc.as_bytes().to_vec()))
        .map_err(|e| CryptoError::InvalidKeyMaterial(format!("cannot encode private key: {e}")))
}

/// X.509 DER, Base64-wrapped.
pub fn encode_public_key(key: &RsaPublicKey) -> Result<String> {
    Ok(encoding::encode(&public_key_der(key)?))
}

/// PKCS#8 DER, Base64-wrapped.
pub fn encode_private_key(key: &RsaPrivateKey) -> Result<Zeroizing<String>> {
    Ok(Zeroizing::new(encoding::encode(&private_key_der(key)?)))
}

fn write_failure(path: &Path, e: std::io::Error) -> CryptoError {
    CryptoError::FileWriteFailure {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
