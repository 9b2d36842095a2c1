use std::path::PathBuf;

use clap::Args;
use tracing::info;

use cipherkit_core::crypto::rsa_keys::{
    encode_private_key, encode_public_key, generate_rsa_keypair, KeySource,
};
use cipherkit_core::crypto::rsa_oaep::{
    rsa_oaep_decrypt_with, rsa_oaep_encrypt_with, OaepMgf,
};

use super::{read_input, CommandResult};

/// An RSA key given inline as Base64 DER, or as a DER file.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct RsaKeyArgs {
    /// Base64-encoded key (X.509 public or PKCS#8 private)
    #[arg(long)]
    pub key: Option<String>,

    /// Path to a DER key file
    #[arg(long)]
    pub key_file: Option<PathBuf>,
}

impl RsaKeyArgs {
    fn source(&self) -> Result<KeySource<'_>, Box<dyn std::error::Error>> {
        match (&self.key, &self.key_file) {
            (Some(key), _) => Ok(KeySource::Base64(key.as_str())),
            (None, Some(path)) => Ok(KeySource::File(path.as_path())),
            (None, None) => Err("either --key or --key-file is required".into()),
        }
    }
}

/// OAEP mask hash selection. MGF1-SHA-1 unless asked otherwise.
#[derive(Args, Debug)]
pub struct OaepArgs {
    /// Use MGF1-SHA-256 instead of the JCE-compatible MGF1-SHA-1
    #[arg(long)]
    pub mgf1_sha256: bool,
}

impl OaepArgs {
    fn mgf(&self) -> OaepMgf {
        if self.mgf1_sha256 {
            OaepMgf::Sha256
        } else {
            OaepMgf::Sha1
        }
    }
}

/// Generate a 2048-bit key pair and either print it or write DER files.
pub fn run_keygen(out: Option<PathBuf>) -> CommandResult {
    info!("generating RSA-2048 key pair");
    let pair = generate_rsa_keypair()?;

    match out {
        Some(dir) => {
            let (public_path, private_path) = pair.write_der_files(&dir)?;
            println!("Public key:  {}", public_path.display());
            println!("Private key: {}", private_path.display());
        }
        None => {
            println!("public:  {}", encode_public_key(&pair.public_key)?);
            println!("private: {}", encode_private_key(&pair.private_key)?.as_str());
        }
    }
    Ok(())
}

/// Encrypt text (argument or stdin) under a public key.
pub fn run_encrypt(text: Option<String>, key: RsaKeyArgs, padding: OaepArgs) -> CommandResult {
    let plaintext = read_input(text)?;
    println!("{}", rsa_oaep_encrypt_with(&plaintext, key.source()?, padding.mgf())?);
    Ok(())
}

/// Decrypt a Base64 ciphertext (argument or stdin) with a private key.
pub fn run_decrypt(
    ciphertext: Option<String>,
    key: RsaKeyArgs,
    padding: OaepArgs,
) -> CommandResult {
    let ciphertext = read_input(ciphertext)?;
    let plaintext = rsa_oaep_decrypt_with(ciphertext.trim(), key.source()?, padding.mgf())?;
    println!("{plaintext}");
    Ok(())
}
