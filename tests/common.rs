// tests/common.rs
//! Shared test utilities: logging setup and key fixtures

#![allow(dead_code)] // each test binary uses a different subset

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging; respects RUST_LOG=
/// Idempotent, safe to call from every test
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Deterministic 32-byte key: `[offset, offset+1, ...]`
pub fn sequential_key(offset: u8) -> Vec<u8> {
    (0..32u8).map(|i| i.wrapping_add(offset)).collect()
}
