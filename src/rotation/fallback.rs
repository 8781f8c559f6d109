// src/rotation/fallback.rs
//! Ordered multi-key attempt loop

use tracing::warn;

use crate::aliases::KeyBytes;
use crate::error::{EncryptionError, Result};

/// Run `attempt` against each key in order and return the first success
///
/// Every key goes through the same `attempt`, current key included. Individual
/// failures are dropped; the caller only learns that nothing matched.
pub(crate) fn first_success<T, F>(keys: &[KeyBytes], mut attempt: F) -> Option<T>
where
    F: FnMut(&[u8]) -> Result<T>,
{
    keys.iter().enumerate().find_map(|(position, key)| {
        match attempt(key.as_slice()) {
            Ok(value) => Some(value),
            Err(EncryptionError::InvalidKey { expected, got }) => {
                warn!(position, expected, got, "configured key has invalid length, skipping");
                None
            }
            Err(_) => None,
        }
    })
}
