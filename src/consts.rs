// src/consts.rs
//! Shared constants: cipher parameters and wire format sizes

/// AES-256 key length in bytes
pub const KEY_SIZE: usize = 32;

/// AES-GCM nonce length in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// AES-GCM authentication tag length, appended to the ciphertext by the primitive
pub const TAG_SIZE: usize = 16;

/// Separator between format and payload in key strings (`base64:...`)
pub const KEY_FORMAT_SEPARATOR: char = ':';

/// Env var naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "ENCRYPTION_CONFIG";

/// Env var holding the current key string
pub const KEY_ENV: &str = "ENCRYPTION_KEY";

/// Env var holding comma-separated retired key strings, most recent first
pub const PREVIOUS_KEYS_ENV: &str = "ENCRYPTION_PREVIOUS_KEYS";

/// Default config file name when `ENCRYPTION_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "encryption.toml";
