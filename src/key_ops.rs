// src/key_ops.rs
//! Key generation and representation utilities
//!
//! Keys travel through config files and environment variables as
//! `"<format>:<encoded>"` strings, e.g. `base64:AAEC...` or `hex:0001...`.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Serialize;
use zeroize::Zeroizing;

use crate::aliases::{Key32, KeyBytes};
use crate::consts::{KEY_FORMAT_SEPARATOR, KEY_SIZE};
use crate::crypto::{OsRandom, SecureRandom};
use crate::enums::KeyFormat;
use crate::error::{EncryptionError, Result};

/// Generate a new random 256-bit key from the OS RNG
pub fn generate_key() -> Result<Key32> {
    generate_key_with(&OsRandom)
}

/// Generate a new random 256-bit key from the given source
///
/// No uniqueness check against earlier keys; persist what you generate.
pub fn generate_key_with(rng: &dyn SecureRandom) -> Result<Key32> {
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    rng.fill(key.as_mut_slice())?;
    Ok(key)
}

/// Serialize key bytes as `"<format>:<encoded>"`
pub fn encode_key(format: KeyFormat, key: &[u8]) -> String {
    let encoded = match format {
        KeyFormat::Base64 => STANDARD.encode(key),
        KeyFormat::Hex => hex::encode(key),
    };
    format!("{format}{KEY_FORMAT_SEPARATOR}{encoded}")
}

/// Generate a fresh key and return it in string form
pub fn generate_key_string(format: KeyFormat) -> Result<String> {
    let key = generate_key()?;
    Ok(encode_key(format, key.as_slice()))
}

/// Parse a `"<format>:<encoded>"` key string
///
/// The decoded length is not checked here; a wrong-length key surfaces as
/// `InvalidKey` the first time it is used.
pub fn parse_key(encoded: &str) -> Result<KeyBytes> {
    let (format, payload) = encoded.split_once(KEY_FORMAT_SEPARATOR).ok_or_else(|| {
        EncryptionError::MalformedKeyEncoding(format!(
            "expected \"<format>{KEY_FORMAT_SEPARATOR}<encoded>\""
        ))
    })?;

    let bytes = match format.parse::<KeyFormat>()? {
        KeyFormat::Base64 => STANDARD
            .decode(payload)
            .map_err(|e| EncryptionError::MalformedKeyEncoding(format!("base64: {e}")))?,
        KeyFormat::Hex => hex::decode(payload)
            .map_err(|e| EncryptionError::MalformedKeyEncoding(format!("hex: {e}")))?,
    };
    Ok(Zeroizing::new(bytes))
}

/// Parse an ordered list of key strings, stopping at the first bad one
pub fn parse_keys<I, S>(keys: I) -> Result<Vec<KeyBytes>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter().map(|k| parse_key(k.as_ref())).collect()
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone, Serialize)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(key: &[u8]) -> KeyRepr {
    KeyRepr {
        hex: hex::encode(key),
        base64: STANDARD.encode(key),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key),
    }
}
