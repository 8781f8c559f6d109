// src/contract.rs
//! The encryption adapter contract
//!
//! [`Encrypter`](crate::provider::Encrypter) talks to adapters only through
//! this trait, so the real AES-GCM adapter and the test fake are interchangeable.

use crate::aliases::KeyBytes;
use crate::error::Result;

pub trait Encryption: Send + Sync {
    /// Encrypt plain bytes, optionally binding additional authenticated data
    fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<String>;

    /// Decrypt a base64 envelope; `aad` must match what was used to encrypt
    fn decrypt(&self, envelope: &str, aad: Option<&[u8]>) -> Result<Vec<u8>>;

    /// Produce fresh key material suitable for this adapter
    fn generate_key(&self) -> Result<KeyBytes>;
}
