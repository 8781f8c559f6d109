// src/bin/keygen.rs
//! Generate a fresh 256-bit key for `ENCRYPTION_KEY` / `encryption.toml`
//!
//! Usage: rotating-aead-keygen [base64|hex] [--json]

use anyhow::{bail, Context, Result};
use rotating_aead::key_ops::{encode_key, generate_key, key_representations};
use rotating_aead::KeyFormat;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut format = KeyFormat::default();
    let mut as_json = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            "-h" | "--help" => {
                println!("Usage: rotating-aead-keygen [base64|hex] [--json]");
                return Ok(());
            }
            other if other.starts_with('-') => bail!("unknown flag: {other}"),
            other => {
                format = other
                    .parse()
                    .with_context(|| format!("choose one of: base64, hex (got {other:?})"))?
            }
        }
    }

    let key = generate_key().context("secure random source unavailable")?;
    let key_string = encode_key(format, key.as_slice());
    info!(%format, "generated new encryption key");

    if as_json {
        let out = json!({
            "key": key_string,
            "representations": key_representations(key.as_slice()),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{key_string}");
    }

    Ok(())
}
