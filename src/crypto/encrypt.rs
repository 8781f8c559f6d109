// src/crypto/encrypt.rs
use aes_gcm::aead::{Aead, Payload};
use aes_gcm::Nonce;

use super::{cipher_for, Envelope, OsRandom, SecureRandom};
use crate::consts::NONCE_SIZE;
use crate::error::{EncryptionError, Result};

/// Encrypt `plaintext` under `key` → base64 envelope, nonce from the OS RNG
///
/// Two calls with identical inputs never produce the same output.
pub fn seal(key: &[u8], plaintext: &[u8], aad: Option<&[u8]>) -> Result<String> {
    seal_with(&OsRandom, key, plaintext, aad)
}

/// Same as [`seal`] with an explicit random source
pub fn seal_with(
    rng: &dyn SecureRandom,
    key: &[u8],
    plaintext: &[u8],
    aad: Option<&[u8]>,
) -> Result<String> {
    seal_envelope(rng, key, plaintext, aad).map(|env| env.encode())
}

/// Encrypt and return the framed envelope without transport encoding
pub fn seal_envelope(
    rng: &dyn SecureRandom,
    key: &[u8],
    plaintext: &[u8],
    aad: Option<&[u8]>,
) -> Result<Envelope> {
    let cipher = cipher_for(key)?;

    let mut nonce = [0u8; NONCE_SIZE];
    rng.fill(&mut nonce)?;

    let ciphertext = cipher
        .encrypt(
            Nonce::from_slice(&nonce),
            Payload {
                msg: plaintext,
                aad: aad.unwrap_or_default(),
            },
        )
        .map_err(|_| EncryptionError::PlaintextTooLong)?;

    Ok(Envelope::new(nonce, ciphertext))
}
