// src/lib.rs
//! rotating-aead: AES-256-GCM encryption with transparent key rotation
//!
//! Features:
//! - Random 96-bit nonce per message, `base64(nonce || ciphertext || tag)` envelopes
//! - Optional additional authenticated data, never stored in the envelope
//! - Decryption falls back through retired keys, so rotating the current key
//!   never strands existing ciphertexts
//! - Keys zeroized on drop

pub mod aliases;
pub mod config;
pub mod consts;
pub mod contract;
pub mod crypto;
pub mod enums;
pub mod error;
pub mod fake;
pub mod key_ops;
pub mod keyring;
pub mod provider;
pub mod rotation;

// Re-export everything users need at the crate root
pub use aliases::{Key32, KeyBytes};
pub use config::{load as load_config, Config};
pub use contract::Encryption;
pub use crypto::{open, seal, Envelope, OsRandom, SecureRandom};
pub use enums::KeyFormat;
pub use error::{EncryptionError, Result};
pub use key_ops::{encode_key, generate_key, generate_key_string, parse_key, parse_keys};
pub use keyring::KeyRing;
pub use provider::{EncryptOptions, Encrypter};
pub use rotation::Aes256GcmAdapter;
