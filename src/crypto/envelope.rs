// src/crypto/envelope.rs
//! Transport framing: `nonce || ciphertext_with_tag`, base64 encoded

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::consts::NONCE_SIZE;
use crate::error::{EncryptionError, Result};

/// A decoded ciphertext envelope
///
/// Carries no key id, version byte or AAD; those travel out of band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    nonce: [u8; NONCE_SIZE],
    ciphertext: Vec<u8>,
}

impl Envelope {
    pub fn new(nonce: [u8; NONCE_SIZE], ciphertext: Vec<u8>) -> Self {
        Self { nonce, ciphertext }
    }

    /// Decode the base64 transport form and split off the nonce
    ///
    /// Accepts `&str` or raw bytes holding base64 text.
    pub fn decode(encoded: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = STANDARD
            .decode(encoded.as_ref())
            .map_err(|_| EncryptionError::InvalidBase64)?;
        Self::from_bytes(&bytes)
    }

    /// Split already-decoded framed bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < NONCE_SIZE {
            return Err(EncryptionError::CiphertextTooShort {
                min: NONCE_SIZE,
                got: bytes.len(),
            });
        }
        let (nonce, ciphertext) = bytes.split_at(NONCE_SIZE);
        let mut fixed = [0u8; NONCE_SIZE];
        fixed.copy_from_slice(nonce);
        Ok(Self::new(fixed, ciphertext.to_vec()))
    }

    pub fn nonce(&self) -> &[u8; NONCE_SIZE] {
        &self.nonce
    }

    /// Ciphertext with the authentication tag still attached
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(NONCE_SIZE + self.ciphertext.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }
}
