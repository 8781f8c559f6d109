// src/config/mod.rs
//! Configuration for rotating-aead
//!
//! Key strings come from a TOML file and/or environment variables. Nothing is
//! cached globally: `load()` returns an owned [`Config`] that the caller turns
//! into an adapter once at startup.

pub use app::{Config, Keys};
pub use env::{load, load_with};

mod app;
mod env;
