// src/crypto/mod.rs
//! Single-key AES-256-GCM engine. No key lists, no state
//!
//! All functions work on fully-buffered messages. Wire format:
//! `base64(nonce[12] || ciphertext || tag[16])`, standard padded alphabet.
mod decrypt;
mod encrypt;
mod envelope;
mod random;

use aes_gcm::aead::KeyInit;
use aes_gcm::Aes256Gcm;

use crate::consts::KEY_SIZE;
use crate::error::{EncryptionError, Result};

pub use decrypt::{open, open_envelope};
pub use encrypt::{seal, seal_envelope, seal_with};
pub use envelope::Envelope;
pub use random::{OsRandom, SecureRandom};

/// Build the cipher, rejecting any key that is not exactly 256 bits
pub(crate) fn cipher_for(key: &[u8]) -> Result<Aes256Gcm> {
    if key.len() != KEY_SIZE {
        return Err(EncryptionError::InvalidKey {
            expected: KEY_SIZE,
            got: key.len(),
        });
    }
    Aes256Gcm::new_from_slice(key).map_err(|_| EncryptionError::InvalidKey {
        expected: KEY_SIZE,
        got: key.len(),
    })
}
