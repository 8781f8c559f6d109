// src/crypto/random.rs
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{EncryptionError, Result};

/// Source of cryptographically secure random bytes
///
/// Implementations must be safe to share between threads. A failure is
/// fatal for the operation that asked for the bytes; nothing retries.
pub trait SecureRandom: Send + Sync {
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// Operating-system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| EncryptionError::RandomnessUnavailable(e.to_string()))
    }
}
