// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncryptionError;

/// Text encoding of a key inside a `"<format>:<encoded>"` key string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    /// Standard padded base64
    #[default]
    Base64,
    /// Lowercase hex
    Hex,
}

impl KeyFormat {
    pub const ALL: [KeyFormat; 2] = [KeyFormat::Base64, KeyFormat::Hex];

    pub fn as_str(self) -> &'static str {
        match self {
            KeyFormat::Base64 => "base64",
            KeyFormat::Hex => "hex",
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyFormat {
    type Err = EncryptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base64" => Ok(KeyFormat::Base64),
            "hex" => Ok(KeyFormat::Hex),
            other => Err(EncryptionError::UnsupportedKeyFormat(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        for format in KeyFormat::ALL {
            assert_eq!(format.as_str().parse::<KeyFormat>().unwrap(), format);
        }
    }

    #[test]
    fn rejects_unknown_and_case_variants() {
        assert!(matches!(
            "rot13".parse::<KeyFormat>(),
            Err(EncryptionError::UnsupportedKeyFormat(f)) if f == "rot13"
        ));
        assert!("HEX".parse::<KeyFormat>().is_err());
    }
}
