//! Seams for platform services the ciphers depend on.

pub mod random;
