use std::env;

use tracing::warn;

use cipherkit_core::constants::{AES_BLOCK_LEN, LEGACY_IV};
use cipherkit_core::crypto::aes_cbc::IvMode;

/// Filter used when neither `RUST_LOG` nor `CIPHERKIT_LOG` is set.
///
/// Targets match by prefix, so this also covers `cipherkit_core`.
const DEFAULT_LOG_FILTER: &str = "cipherkit=info";

/// CLI configuration loaded from environment variables.
#[derive(Debug)]
pub struct Config {
    /// IV handling for `aes-encrypt` / `aes-decrypt` when `--legacy-iv` is absent.
    pub iv_mode: IvMode,
    /// IV used whenever legacy mode is selected.
    pub legacy_iv: [u8; AES_BLOCK_LEN],
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `CIPHERKIT_IV_MODE` (optional, default `random`): `random` or `legacy`.
    /// - `CIPHERKIT_LEGACY_IV` (optional): 16-character replacement for the legacy IV.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let legacy_iv = match lookup("CIPHERKIT_LEGACY_IV") {
            Some(value) => <[u8; AES_BLOCK_LEN]>::try_from(value.as_bytes()).unwrap_or_else(|_| {
                warn!(
                    len = value.len(),
                    "CIPHERKIT_LEGACY_IV must be {AES_BLOCK_LEN} bytes, using the default"
                );
                LEGACY_IV
            }),
            None => LEGACY_IV,
        };

        let iv_mode = match lookup("CIPHERKIT_IV_MODE").as_deref().map(str::trim) {
            Some("legacy") => IvMode::LegacyFixed(legacy_iv),
            Some("random") | None => IvMode::Random,
            Some(other) => {
                warn!(value = other, "unknown CIPHERKIT_IV_MODE, using random IVs");
                IvMode::Random
            }
        };

        Self { iv_mode, legacy_iv }
    }

    /// IV mode for one command, with `--legacy-iv` taking precedence.
    pub fn iv_mode(&self, force_legacy: bool) -> IvMode {
        if force_legacy {
            IvMode::LegacyFixed(self.legacy_iv)
        } else {
            self.iv_mode
        }
    }
}

/// Default tracing filter: `CIPHERKIT_LOG`, else `cipherkit=info`.
pub fn log_filter() -> String {
    log_filter_from(|name| env::var(name).ok())
}

fn log_filter_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("CIPHERKIT_LOG")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
