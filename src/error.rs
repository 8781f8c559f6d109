// src/error.rs
//! Public error type for the entire crate
//!
//! Messages never carry key material, plaintext or AAD.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncryptionError {
    #[error("invalid key length: expected {expected} bytes, got {got}")]
    InvalidKey { expected: usize, got: usize },

    #[error("no current encryption key configured")]
    MissingKey,

    #[error("secure random source unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("ciphertext is not valid base64")]
    InvalidBase64,

    #[error("ciphertext too short: need at least {min} bytes, got {got}")]
    CiphertextTooShort { min: usize, got: usize },

    #[error("plaintext exceeds the cipher's message size limit")]
    PlaintextTooLong,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("decryption failed with all configured keys")]
    AllKeysFailed,

    #[error("unsupported key format: {0}")]
    UnsupportedKeyFormat(String),

    #[error("malformed key encoding: {0}")]
    MalformedKeyEncoding(String),

    #[error("decrypted data is not valid UTF-8")]
    InvalidUtf8,

    #[error("configuration error: {0}")]
    Config(String),

    /// Returned by the fake adapter when an error has been injected
    #[error("{0}")]
    Injected(String),
}

impl EncryptionError {
    /// Configuration problems that will not go away by retrying or rotating keys
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EncryptionError::InvalidKey { .. }
                | EncryptionError::MissingKey
                | EncryptionError::RandomnessUnavailable(_)
                | EncryptionError::Config(_)
        )
    }

    /// Caller supplied an envelope that could never decrypt under any key
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            EncryptionError::InvalidBase64 | EncryptionError::CiphertextTooShort { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EncryptionError>;
