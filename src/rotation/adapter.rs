// src/rotation/adapter.rs
//! AES-256-GCM adapter with transparent key rotation
//!
//! Encryption always uses the current key. Decryption walks
//! `[current, previous...]` and returns the first key that authenticates,
//! so data sealed under a retired key keeps working until it is re-encrypted.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use super::fallback::first_success;
use crate::aliases::{Key32, KeyBytes};
use crate::contract::Encryption;
use crate::crypto::{open_envelope, seal_with, Envelope, OsRandom, SecureRandom};
use crate::error::{EncryptionError, Result};
use crate::key_ops::generate_key_with;

/// Returns the current key; called once per operation
pub type KeyAccessor = Arc<dyn Fn() -> Vec<u8> + Send + Sync>;

/// Returns retired keys, most recently retired first
pub type PreviousKeysAccessor = Arc<dyn Fn() -> Vec<Vec<u8>> + Send + Sync>;

#[derive(Clone)]
pub struct Aes256GcmAdapter {
    key: Option<KeyAccessor>,
    previous_keys: Option<PreviousKeysAccessor>,
    rng: Arc<dyn SecureRandom>,
}

impl Aes256GcmAdapter {
    /// Adapter whose current key is fetched from `key` on every call
    pub fn new<F>(key: F) -> Self
    where
        F: Fn() -> Vec<u8> + Send + Sync + 'static,
    {
        Self {
            key: Some(Arc::new(key)),
            previous_keys: None,
            rng: Arc::new(OsRandom),
        }
    }

    /// Decrypt-only adapter: no current key, only retired ones
    ///
    /// `encrypt` fails with [`EncryptionError::MissingKey`].
    pub fn without_current_key() -> Self {
        Self {
            key: None,
            previous_keys: None,
            rng: Arc::new(OsRandom),
        }
    }

    /// Adapter over a fixed key set
    pub fn from_keys(current: Vec<u8>, previous: Vec<Vec<u8>>) -> Self {
        let current = Zeroizing::new(current);
        let previous: Vec<KeyBytes> = previous.into_iter().map(Zeroizing::new).collect();
        Self::new(move || current.to_vec()).with_previous_keys(move || {
            previous.iter().map(|k| k.to_vec()).collect()
        })
    }

    pub fn with_previous_keys<F>(mut self, previous_keys: F) -> Self
    where
        F: Fn() -> Vec<Vec<u8>> + Send + Sync + 'static,
    {
        self.previous_keys = Some(Arc::new(previous_keys));
        self
    }

    /// Replace the nonce/key random source (tests, HSM-backed RNGs)
    pub fn with_random<R>(mut self, rng: R) -> Self
    where
        R: SecureRandom + 'static,
    {
        self.rng = Arc::new(rng);
        self
    }

    fn current_key(&self) -> Option<KeyBytes> {
        self.key.as_ref().map(|key| Zeroizing::new(key()))
    }

    /// Resolve `[current, previous...]` fresh from the accessors
    pub fn keys(&self) -> Vec<KeyBytes> {
        let mut keys: Vec<KeyBytes> = self.current_key().into_iter().collect();
        if let Some(previous) = &self.previous_keys {
            keys.extend(previous().into_iter().map(Zeroizing::new));
        }
        keys
    }

    pub fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<String> {
        let key = self.current_key().ok_or_else(|| {
            warn!("encrypt called without a current key");
            EncryptionError::MissingKey
        })?;
        trace!(len = plaintext.len(), aad = aad.is_some(), "sealing payload");
        seal_with(self.rng.as_ref(), &key, plaintext, aad).inspect_err(|e| {
            if e.is_fatal() {
                warn!(error = %e, "encryption failed");
            }
        })
    }

    pub fn decrypt(&self, envelope: impl AsRef<[u8]>, aad: Option<&[u8]>) -> Result<Vec<u8>> {
        // malformed input fails before any key is touched
        let envelope = Envelope::decode(envelope)?;

        let keys = self.keys();
        debug!(candidates = keys.len(), "decrypting envelope");

        first_success(&keys, |key| open_envelope(key, &envelope, aad)).ok_or_else(|| {
            warn!(candidates = keys.len(), "no configured key could decrypt envelope");
            EncryptionError::AllKeysFailed
        })
    }

    /// Decrypt with whichever key matches and re-seal under the current key
    pub fn reencrypt(&self, envelope: impl AsRef<[u8]>, aad: Option<&[u8]>) -> Result<String> {
        let plaintext = Zeroizing::new(self.decrypt(envelope, aad)?);
        self.encrypt(&plaintext, aad)
    }

    /// 32 random bytes from this adapter's random source
    pub fn generate_key(&self) -> Result<Key32> {
        generate_key_with(self.rng.as_ref())
    }
}

impl fmt::Debug for Aes256GcmAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes256GcmAdapter")
            .field("has_current_key", &self.key.is_some())
            .field("has_previous_keys", &self.previous_keys.is_some())
            .finish_non_exhaustive()
    }
}

impl Encryption for Aes256GcmAdapter {
    fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<String> {
        Aes256GcmAdapter::encrypt(self, plaintext, aad)
    }

    fn decrypt(&self, envelope: &str, aad: Option<&[u8]>) -> Result<Vec<u8>> {
        Aes256GcmAdapter::decrypt(self, envelope, aad)
    }

    fn generate_key(&self) -> Result<KeyBytes> {
        let key = Aes256GcmAdapter::generate_key(self)?;
        Ok(Zeroizing::new(key.to_vec()))
    }
}
