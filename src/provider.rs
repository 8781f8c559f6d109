// src/provider.rs
//! Explicit encryption provider
//!
//! Build one [`Encrypter`] at startup and hand it (or clones of it) to the
//! components that need encryption. There is no process-wide registry.

use std::sync::Arc;

use crate::contract::Encryption;
use crate::enums::KeyFormat;
use crate::error::{EncryptionError, Result};
use crate::key_ops::encode_key;
use crate::rotation::Aes256GcmAdapter;

/// Per-call options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncryptOptions {
    aad: Option<Vec<u8>>,
}

impl EncryptOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind additional authenticated data (user id, record id, ...)
    ///
    /// Only one AAD value exists per call; setting it again replaces it.
    pub fn with_aad(mut self, aad: impl Into<Vec<u8>>) -> Self {
        self.aad = Some(aad.into());
        self
    }

    pub fn aad(&self) -> Option<&[u8]> {
        self.aad.as_deref()
    }
}

#[derive(Clone)]
pub struct Encrypter {
    adapter: Arc<dyn Encryption>,
}

impl Encrypter {
    pub fn new<E>(adapter: E) -> Self
    where
        E: Encryption + 'static,
    {
        Self {
            adapter: Arc::new(adapter),
        }
    }

    /// Share an adapter that the caller also keeps a handle to (e.g. a fake)
    pub fn from_shared(adapter: Arc<dyn Encryption>) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &dyn Encryption {
        self.adapter.as_ref()
    }

    /// Encrypt a string or byte payload
    pub fn encrypt(&self, plain: impl AsRef<[u8]>, options: &EncryptOptions) -> Result<String> {
        self.adapter.encrypt(plain.as_ref(), options.aad())
    }

    /// Decrypt an envelope given as `&str`, `String` or bytes
    pub fn decrypt(&self, envelope: impl AsRef<[u8]>, options: &EncryptOptions) -> Result<Vec<u8>> {
        let envelope =
            std::str::from_utf8(envelope.as_ref()).map_err(|_| EncryptionError::InvalidBase64)?;
        self.adapter.decrypt(envelope, options.aad())
    }

    pub fn decrypt_string(
        &self,
        envelope: impl AsRef<[u8]>,
        options: &EncryptOptions,
    ) -> Result<String> {
        let plain = self.decrypt(envelope, options)?;
        String::from_utf8(plain).map_err(|_| EncryptionError::InvalidUtf8)
    }

    /// Ask the adapter for a new key and return it as `"<format>:<encoded>"`
    pub fn generate_key(&self, format: KeyFormat) -> Result<String> {
        let key = self.adapter.generate_key()?;
        Ok(encode_key(format, &key))
    }
}

impl From<Aes256GcmAdapter> for Encrypter {
    fn from(adapter: Aes256GcmAdapter) -> Self {
        Self::new(adapter)
    }
}

impl std::fmt::Debug for Encrypter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Encrypter").finish_non_exhaustive()
    }
}
