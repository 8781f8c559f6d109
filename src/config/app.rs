// src/config/app.rs
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use zeroize::{Zeroize, Zeroizing};

use crate::aliases::KeyBytes;
use crate::consts::KEY_SIZE;
use crate::error::{EncryptionError, Result};
use crate::key_ops::parse_key;
use crate::keyring::KeyRing;
use crate::rotation::Aes256GcmAdapter;

/// ```toml
/// [keys]
/// current = "base64:..."
/// previous = ["hex:...", "base64:..."]   # most recently retired first
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub keys: Keys,
}

#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Keys {
    pub current: Option<String>,
    #[serde(default)]
    pub previous: Vec<String>,
}

impl Drop for Keys {
    fn drop(&mut self) {
        self.current.zeroize();
        self.previous.zeroize();
    }
}

impl fmt::Debug for Keys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys")
            .field("current", &self.current.as_ref().map(|_| "[REDACTED]"))
            .field("previous", &self.previous.len())
            .finish()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config").field("keys", &self.keys).finish()
    }
}

fn parse_checked(label: &str, encoded: &str) -> Result<KeyBytes> {
    let key = parse_key(encoded).map_err(|e| EncryptionError::Config(format!("{label}: {e}")))?;
    if key.len() != KEY_SIZE {
        return Err(EncryptionError::Config(format!(
            "{label}: key must be {KEY_SIZE} bytes, got {}",
            key.len()
        )));
    }
    Ok(key)
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EncryptionError::Config(format!("invalid TOML: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map(Zeroizing::new)
            .map_err(|e| EncryptionError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Decode and length-check every configured key
    ///
    /// Errors name the offending entry (`keys.previous[1]`), never its value.
    pub fn parsed_keys(&self) -> Result<(Option<KeyBytes>, Vec<KeyBytes>)> {
        let current = self
            .keys
            .current
            .as_deref()
            .map(|k| parse_checked("keys.current", k))
            .transpose()?;
        let previous = self
            .keys
            .previous
            .iter()
            .enumerate()
            .map(|(i, k)| parse_checked(&format!("keys.previous[{i}]"), k))
            .collect::<Result<Vec<_>>>()?;
        Ok((current, previous))
    }

    /// Static-key adapter; decrypt-only when no current key is configured
    pub fn build_adapter(&self) -> Result<Aes256GcmAdapter> {
        let (current, previous) = self.parsed_keys()?;
        let adapter = match current {
            Some(current) => Aes256GcmAdapter::from_keys(
                current.to_vec(),
                previous.iter().map(|k| k.to_vec()).collect(),
            ),
            None => Aes256GcmAdapter::without_current_key()
                .with_previous_keys(move || previous.iter().map(|k| k.to_vec()).collect()),
        };
        Ok(adapter)
    }

    /// Rotatable key ring; requires a current key
    pub fn build_keyring(&self) -> Result<KeyRing> {
        let (current, previous) = self.parsed_keys()?;
        let current = current.ok_or(EncryptionError::MissingKey)?;
        KeyRing::with_previous(
            current.to_vec(),
            previous.iter().map(|k| k.to_vec()).collect(),
        )
    }
}
