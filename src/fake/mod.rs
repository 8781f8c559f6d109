// src/fake/mod.rs
//! Recording fake adapter for tests of code that encrypts things
//!
//! ```
//! use rotating_aead::fake;
//! use rotating_aead::EncryptOptions;
//!
//! let (encrypter, fake) = fake::encrypter();
//! let envelope = encrypter.encrypt("secret", &EncryptOptions::new()).unwrap();
//! assert_eq!(encrypter.decrypt_string(&envelope, &EncryptOptions::new()).unwrap(), "secret");
//!
//! fake.assert_encrypted_string("secret");
//! fake.assert_decrypted_count(1);
//! ```
mod assertions;

use std::collections::HashMap;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use parking_lot::Mutex;
use zeroize::Zeroizing;

use crate::aliases::KeyBytes;
use crate::contract::Encryption;
use crate::error::{EncryptionError, Result};
use crate::provider::Encrypter;

/// Prefix of envelopes produced by the fake
pub const FAKE_PREFIX: &str = "fake:";

/// Key returned by [`FakeEncryption::generate_key`] unless overridden
pub const FAKE_KEY: &[u8; 32] = b"fake-encryption-key-32-bytes!!!!";

pub type EncryptFn = Arc<dyn Fn(&[u8], Option<&[u8]>) -> Result<String> + Send + Sync>;
pub type DecryptFn = Arc<dyn Fn(&str, Option<&[u8]>) -> Result<Vec<u8>> + Send + Sync>;
pub type GenerateKeyFn = Arc<dyn Fn() -> Result<Vec<u8>> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptCall {
    pub plaintext: Vec<u8>,
    pub aad: Option<Vec<u8>>,
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptCall {
    pub envelope: String,
    pub aad: Option<Vec<u8>>,
    pub result: Vec<u8>,
}

#[derive(Default)]
struct State {
    encrypt_calls: Vec<EncryptCall>,
    decrypt_calls: Vec<DecryptCall>,
    generate_key_calls: usize,

    encrypt_error: Option<EncryptionError>,
    decrypt_error: Option<EncryptionError>,
    generate_key_error: Option<EncryptionError>,

    encrypt_fn: Option<EncryptFn>,
    decrypt_fn: Option<DecryptFn>,
    generate_key_fn: Option<GenerateKeyFn>,

    store: HashMap<String, Vec<u8>>,
}

/// Fake [`Encryption`] adapter: no real cryptography, everything recorded
#[derive(Default)]
pub struct FakeEncryption {
    state: Mutex<State>,
}

/// Fresh fake plus an [`Encrypter`] wired to it
pub fn encrypter() -> (Encrypter, Arc<FakeEncryption>) {
    let fake = Arc::new(FakeEncryption::new());
    (Encrypter::from_shared(fake.clone()), fake)
}

impl FakeEncryption {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Behaviour overrides ---

    pub fn fail_encrypt_with(&self, error: EncryptionError) {
        self.state.lock().encrypt_error = Some(error);
    }

    pub fn fail_decrypt_with(&self, error: EncryptionError) {
        self.state.lock().decrypt_error = Some(error);
    }

    pub fn fail_generate_key_with(&self, error: EncryptionError) {
        self.state.lock().generate_key_error = Some(error);
    }

    pub fn on_encrypt<F>(&self, f: F)
    where
        F: Fn(&[u8], Option<&[u8]>) -> Result<String> + Send + Sync + 'static,
    {
        self.state.lock().encrypt_fn = Some(Arc::new(f));
    }

    pub fn on_decrypt<F>(&self, f: F)
    where
        F: Fn(&str, Option<&[u8]>) -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        self.state.lock().decrypt_fn = Some(Arc::new(f));
    }

    pub fn on_generate_key<F>(&self, f: F)
    where
        F: Fn() -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        self.state.lock().generate_key_fn = Some(Arc::new(f));
    }

    /// Forget recorded calls, injected errors and custom behaviour
    pub fn reset(&self) {
        *self.state.lock() = State::default();
    }

    // --- Inspection ---

    pub fn encrypt_count(&self) -> usize {
        self.state.lock().encrypt_calls.len()
    }

    pub fn decrypt_count(&self) -> usize {
        self.state.lock().decrypt_calls.len()
    }

    pub fn generate_key_count(&self) -> usize {
        self.state.lock().generate_key_calls
    }

    pub fn encrypt_calls(&self) -> Vec<EncryptCall> {
        self.state.lock().encrypt_calls.clone()
    }

    pub fn decrypt_calls(&self) -> Vec<DecryptCall> {
        self.state.lock().decrypt_calls.clone()
    }

    pub fn last_encrypt_call(&self) -> Option<EncryptCall> {
        self.state.lock().encrypt_calls.last().cloned()
    }

    pub fn last_decrypt_call(&self) -> Option<DecryptCall> {
        self.state.lock().decrypt_calls.last().cloned()
    }

    fn record_encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>, result: &str) {
        self.state.lock().encrypt_calls.push(EncryptCall {
            plaintext: plaintext.to_vec(),
            aad: aad.map(<[u8]>::to_vec),
            result: result.to_owned(),
        });
    }

    fn record_decrypt(&self, envelope: &str, aad: Option<&[u8]>, result: &[u8]) {
        self.state.lock().decrypt_calls.push(DecryptCall {
            envelope: envelope.to_owned(),
            aad: aad.map(<[u8]>::to_vec),
            result: result.to_vec(),
        });
    }
}

impl Encryption for FakeEncryption {
    fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<String> {
        // custom closures run outside the lock so they may call back into the fake
        let (custom, injected) = {
            let state = self.state.lock();
            (state.encrypt_fn.clone(), state.encrypt_error.clone())
        };

        if let Some(f) = custom {
            let result = f(plaintext, aad)?;
            self.record_encrypt(plaintext, aad, &result);
            return Ok(result);
        }
        if let Some(error) = injected {
            return Err(error);
        }

        let result = format!("{FAKE_PREFIX}{}", STANDARD.encode(plaintext));
        self.record_encrypt(plaintext, aad, &result);
        self.state
            .lock()
            .store
            .insert(result.clone(), plaintext.to_vec());
        Ok(result)
    }

    fn decrypt(&self, envelope: &str, aad: Option<&[u8]>) -> Result<Vec<u8>> {
        let (custom, injected, stored) = {
            let state = self.state.lock();
            (
                state.decrypt_fn.clone(),
                state.decrypt_error.clone(),
                state.store.get(envelope).cloned(),
            )
        };

        if let Some(f) = custom {
            let result = f(envelope, aad)?;
            self.record_decrypt(envelope, aad, &result);
            return Ok(result);
        }
        if let Some(error) = injected {
            return Err(error);
        }

        let plaintext = match stored {
            Some(p) => p,
            None => envelope
                .strip_prefix(FAKE_PREFIX)
                .and_then(|b64| STANDARD.decode(b64).ok())
                .ok_or(EncryptionError::AllKeysFailed)?,
        };
        self.record_decrypt(envelope, aad, &plaintext);
        Ok(plaintext)
    }

    fn generate_key(&self) -> Result<KeyBytes> {
        let (custom, injected) = {
            let mut state = self.state.lock();
            state.generate_key_calls += 1;
            (
                state.generate_key_fn.clone(),
                state.generate_key_error.clone(),
            )
        };

        if let Some(f) = custom {
            return f().map(Zeroizing::new);
        }
        if let Some(error) = injected {
            return Err(error);
        }
        Ok(Zeroizing::new(FAKE_KEY.to_vec()))
    }
}

impl std::fmt::Debug for FakeEncryption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("FakeEncryption")
            .field("encrypt_calls", &state.encrypt_calls.len())
            .field("decrypt_calls", &state.decrypt_calls.len())
            .field("generate_key_calls", &state.generate_key_calls)
            .finish()
    }
}
