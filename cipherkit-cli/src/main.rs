mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cipherkit_core::crypto::CryptoError;

use commands::aes::SymmetricKeyArgs;
use commands::rsa::{OaepArgs, RsaKeyArgs};
use config::Config;

#[derive(Parser)]
#[command(name = "cipherkit", about = "AES-CBC and RSA-OAEP encryption of short strings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with AES-CBC and print Base64
    AesEncrypt {
        /// Plaintext; read from stdin if omitted
        text: Option<String>,

        #[command(flatten)]
        key: SymmetricKeyArgs,
    },

    /// Decrypt Base64 AES-CBC ciphertext
    AesDecrypt {
        /// Base64 ciphertext; read from stdin if omitted
        ciphertext: Option<String>,

        #[command(flatten)]
        key: SymmetricKeyArgs,
    },

    /// Print a random Base64 salt for password-based keys
    Salt,

    /// Generate a 2048-bit RSA key pair
    RsaKeygen {
        /// Directory to write public.der and private.der into. Prints Base64 if omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Encrypt text with an RSA public key (OAEP, SHA-256)
    RsaEncrypt {
        /// Plaintext, at most 190 bytes; read from stdin if omitted
        text: Option<String>,

        #[command(flatten)]
        key: RsaKeyArgs,

        #[command(flatten)]
        padding: OaepArgs,
    },

    /// Decrypt Base64 RSA-OAEP ciphertext with a private key
    RsaDecrypt {
        /// Base64 ciphertext; read from stdin if omitted
        ciphertext: Option<String>,

        #[command(flatten)]
        key: RsaKeyArgs,

        #[command(flatten)]
        padding: OaepArgs,
    },
}

fn main() {
    // Initialize tracing (controlled by RUST_LOG, then CIPHERKIT_LOG).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::log_filter())),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let result = match cli.command {
        Commands::AesEncrypt { text, key } => commands::aes::run_encrypt(text, key, &config),
        Commands::AesDecrypt { ciphertext, key } => {
            commands::aes::run_decrypt(ciphertext, key, &config)
        }
        Commands::Salt => commands::aes::run_salt(),
        Commands::RsaKeygen { out } => commands::rsa::run_keygen(out),
        Commands::RsaEncrypt { text, key, padding } => {
            commands::rsa::run_encrypt(text, key, padding)
        }
        Commands::RsaDecrypt {
            ciphertext,
            key,
            padding,
        } => commands::rsa::run_decrypt(ciphertext, key, padding),
    };

    if let Err(e) = result {
        match e.downcast_ref::<CryptoError>() {
            Some(crypto) => eprintln!("Error [{}]: {crypto}", crypto.code()),
            None => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}
