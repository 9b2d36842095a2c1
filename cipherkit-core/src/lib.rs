//! Password-based symmetric and RSA-OAEP encryption of short strings.
//!
//! Every operation is a free function that builds its own cipher context per
//! call. Key material is supplied by the caller and never cached here.

pub mod constants;
pub mod traits;
pub mod platform;
pub mod crypto;
