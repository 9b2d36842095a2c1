/// AES block size, which is also the CBC IV length.
pub const AES_BLOCK_LEN: usize = 16;

/// Key lengths accepted for AES-128, AES-192 and AES-256.
pub const AES_KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// PBKDF2 iterations for password-derived AES keys.
pub const PBKDF2_ITERATIONS: u32 = 65_536;

/// Length of a password-derived AES key (AES-128).
pub const DERIVED_KEY_LEN: usize = 16;

/// Length of salts produced by `crypto::pbkdf2::generate_salt`.
pub const PBKDF2_SALT_LEN: usize = 16;

/// Fixed IV used by the legacy service for every AES operation.
///
/// Doubles as the PBKDF2 salt in `derive_aes_key_legacy`.
pub const LEGACY_IV: [u8; AES_BLOCK_LEN] = *b"encryptionIntVec";

/// RSA modulus size for generated key pairs.
pub const RSA_KEY_BITS: usize = 2048;

/// SHA-256 output length, used in the OAEP size bound.
pub const OAEP_HASH_LEN: usize = 32;

/// Largest plaintext RSA-OAEP(SHA-256) accepts under a 2048-bit modulus.
pub const RSA_OAEP_MAX_PLAINTEXT: usize = RSA_KEY_BITS / 8 - 2 * OAEP_HASH_LEN - 2;

/// File names used when a generated key pair is written to disk.
pub const PUBLIC_KEY_FILE: &str = "public.der";
pub const PRIVATE_KEY_FILE: &str = "private.der";
