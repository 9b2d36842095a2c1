//! CLI command implementations (aes-encrypt, aes-decrypt, salt, rsa-keygen, rsa-encrypt, rsa-decrypt).

pub mod aes;
pub mod rsa;

use std::io::Read;

use cipherkit_core::crypto::encoding::require_utf8;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Use the positional argument, or read all of stdin when it is absent.
///
/// One trailing newline from stdin is dropped.
pub fn read_input(arg: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(text) = arg {
        return Ok(text);
    }

    let mut raw = Vec::new();
    std::io::stdin().read_to_end(&mut raw)?;
    let mut text = require_utf8(raw)?;

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Flag value, else the environment variable, else an interactive prompt.
pub fn read_secret(
    flag: Option<String>,
    env_var: &str,
    prompt: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(value) = flag {
        return Ok(value);
    }
    if let Ok(value) = std::env::var(env_var) {
        return Ok(value);
    }

    let value = rpassword::prompt_password(prompt)?;
    if value.is_empty() {
        return Err(format!("{} cannot be empty", prompt.trim_end_matches(": ")).into());
    }
    Ok(value)
}
