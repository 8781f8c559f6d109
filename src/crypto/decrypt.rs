// src/crypto/decrypt.rs
use aes_gcm::aead::{Aead, Payload};
use aes_gcm::Nonce;

use super::{cipher_for, Envelope};
use crate::error::{EncryptionError, Result};

/// Decrypt a base64 envelope under a single key
///
/// Wrong key, wrong AAD and tampered bytes are indistinguishable:
/// all of them yield [`EncryptionError::AuthenticationFailed`].
pub fn open(key: &[u8], envelope: impl AsRef<[u8]>, aad: Option<&[u8]>) -> Result<Vec<u8>> {
    let envelope = Envelope::decode(envelope)?;
    open_envelope(key, &envelope, aad)
}

/// Decrypt an already-decoded envelope. No partial plaintext on failure.
pub fn open_envelope(key: &[u8], envelope: &Envelope, aad: Option<&[u8]>) -> Result<Vec<u8>> {
    let cipher = cipher_for(key)?;
    cipher
        .decrypt(
            Nonce::from_slice(envelope.nonce()),
            Payload {
                msg: envelope.ciphertext(),
                aad: aad.unwrap_or_default(),
            },
        )
        .map_err(|_| EncryptionError::AuthenticationFailed)
}
