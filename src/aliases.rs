// src/aliases.rs
//! Secret-holding types used throughout rotating-aead
//!
//! Everything here zeroizes on drop.

use zeroize::Zeroizing;

use crate::consts::KEY_SIZE;

/// Fixed-size 256-bit key
pub type Key32 = Zeroizing<[u8; KEY_SIZE]>;

/// Key bytes of unchecked length, as handed over by a key accessor
pub type KeyBytes = Zeroizing<Vec<u8>>;
