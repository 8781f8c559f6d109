// src/keyring.rs
//! In-process key set that can be rotated while adapters are live
//!
//! Adapters built with [`KeyRing::adapter`] read the ring on every call, so a
//! rotation is picked up by the very next encrypt/decrypt.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::aliases::{Key32, KeyBytes};
use crate::consts::KEY_SIZE;
use crate::error::{EncryptionError, Result};
use crate::key_ops::generate_key;
use crate::rotation::Aes256GcmAdapter;

struct KeySet {
    current: KeyBytes,
    /// most recently retired first
    previous: Vec<KeyBytes>,
}

#[derive(Clone)]
pub struct KeyRing {
    inner: Arc<RwLock<KeySet>>,
}

fn checked(key: Vec<u8>) -> Result<KeyBytes> {
    let key = Zeroizing::new(key);
    if key.len() != KEY_SIZE {
        return Err(EncryptionError::InvalidKey {
            expected: KEY_SIZE,
            got: key.len(),
        });
    }
    Ok(key)
}

impl KeyRing {
    pub fn new(current: Vec<u8>) -> Result<Self> {
        Self::with_previous(current, Vec::new())
    }

    /// `previous` is ordered most recently retired first
    pub fn with_previous(current: Vec<u8>, previous: Vec<Vec<u8>>) -> Result<Self> {
        let current = checked(current)?;
        let previous = previous
            .into_iter()
            .map(checked)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            inner: Arc::new(RwLock::new(KeySet { current, previous })),
        })
    }

    /// Install `new_key` as current; the old current becomes the newest retired key
    pub fn rotate(&self, new_key: Vec<u8>) -> Result<()> {
        let new_key = checked(new_key)?;
        let mut set = self.inner.write();
        let retired = std::mem::replace(&mut set.current, new_key);
        set.previous.insert(0, retired);
        info!(retired = set.previous.len(), "encryption key rotated");
        Ok(())
    }

    /// Generate a fresh key, rotate to it and hand back a copy for persisting
    pub fn rotate_to_new_key(&self) -> Result<Key32> {
        let key = generate_key()?;
        self.rotate(key.to_vec())?;
        Ok(key)
    }

    /// Keep at most `keep` retired keys, dropping the oldest; returns how many were dropped
    pub fn prune(&self, keep: usize) -> usize {
        let mut set = self.inner.write();
        let before = set.previous.len();
        set.previous.truncate(keep);
        let dropped = before - set.previous.len();
        if dropped > 0 {
            debug!(dropped, kept = set.previous.len(), "pruned retired keys");
        }
        dropped
    }

    pub fn previous_count(&self) -> usize {
        self.inner.read().previous.len()
    }

    /// Snapshot of `[current, previous...]`
    pub fn keys(&self) -> Vec<KeyBytes> {
        let set = self.inner.read();
        std::iter::once(&set.current)
            .chain(set.previous.iter())
            .cloned()
            .collect()
    }

    /// Adapter whose accessors read this ring on every call
    pub fn adapter(&self) -> Aes256GcmAdapter {
        let current = Arc::clone(&self.inner);
        let previous = Arc::clone(&self.inner);
        Aes256GcmAdapter::new(move || current.read().current.to_vec()).with_previous_keys(
            move || previous.read().previous.iter().map(|k| k.to_vec()).collect(),
        )
    }
}

impl std::fmt::Debug for KeyRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyRing")
            .field("previous", &self.previous_count())
            .finish_non_exhaustive()
    }
}
