use clap::Args;
use tracing::info;

use cipherkit_core::constants::LEGACY_IV;
use cipherkit_core::crypto::aes_cbc::{aes_cbc_decrypt, aes_cbc_encrypt, IvMode};
use cipherkit_core::crypto::encoding;
use cipherkit_core::crypto::keys::SymmetricKey;
use cipherkit_core::crypto::pbkdf2::{derive_aes_key, generate_salt};
use cipherkit_core::platform::NativeRandom;

use super::{read_input, read_secret, CommandResult};
use crate::config::Config;

/// Where the AES key comes from.
#[derive(Args, Debug)]
pub struct SymmetricKeyArgs {
    /// Pre-shared key string (16, 24 or 32 bytes). Falls back to CIPHERKIT_KEY or a prompt.
    #[arg(long, conflicts_with = "password")]
    pub key: Option<String>,

    /// Derive the key with PBKDF2 from a password (CIPHERKIT_PASSWORD or a prompt)
    #[arg(long)]
    pub password: bool,

    /// Base64 PBKDF2 salt. Defaults to the legacy constant salt.
    #[arg(long, requires = "password")]
    pub salt: Option<String>,

    /// Use the fixed legacy IV instead of a random IV per message
    #[arg(long)]
    pub legacy_iv: bool,
}

impl SymmetricKeyArgs {
    fn resolve_key(self) -> Result<SymmetricKey, Box<dyn std::error::Error>> {
        if self.password {
            let password = read_secret(None, "CIPHERKIT_PASSWORD", "Enter password: ")?;
            let salt = match self.salt.as_deref() {
                Some(encoded) => encoding::decode(encoded)
                    .map_err(|e| format!("--salt is not valid Base64: {e}"))?,
                None => LEGACY_IV.to_vec(),
            };
            return Ok(derive_aes_key(&password, &salt)?);
        }

        let key = read_secret(self.key, "CIPHERKIT_KEY", "Enter AES key: ")?;
        Ok(SymmetricKey::from_pre_shared(&key)?)
    }
}

fn iv_mode_for(config: &Config, args: &SymmetricKeyArgs) -> IvMode {
    config.iv_mode(args.legacy_iv)
}

/// Encrypt text (argument or stdin) and print the Base64 ciphertext.
pub fn run_encrypt(text: Option<String>, args: SymmetricKeyArgs, config: &Config) -> CommandResult {
    let mode = iv_mode_for(config, &args);
    let key = args.resolve_key()?;
    let plaintext = read_input(text)?;

    info!(key_bits = key.bits(), ?mode, "encrypting with AES-CBC");
    println!("{}", aes_cbc_encrypt(&plaintext, &key, mode)?);
    Ok(())
}

/// Decrypt a Base64 ciphertext (argument or stdin) and print the plaintext.
pub fn run_decrypt(ciphertext: Option<String>, args: SymmetricKeyArgs, config: &Config) -> CommandResult {
    let mode = iv_mode_for(config, &args);
    let key = args.resolve_key()?;
    let ciphertext = read_input(ciphertext)?;

    info!(key_bits = key.bits(), ?mode, "decrypting with AES-CBC");
    println!("{}", aes_cbc_decrypt(ciphertext.trim(), &key, mode)?);
    Ok(())
}

/// Print a fresh Base64 salt for `--salt`.
pub fn run_salt() -> CommandResult {
    let salt = generate_salt(&NativeRandom::new())?;
    println!("{}", encoding::encode(&salt));
    Ok(())
}
