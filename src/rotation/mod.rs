// src/rotation/mod.rs
//! Multi-key facade over the single-key engine
mod adapter;
mod fallback;

pub use adapter::{Aes256GcmAdapter, KeyAccessor, PreviousKeysAccessor};
