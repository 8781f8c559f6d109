// src/config/env.rs
//! Config file discovery and environment overrides

use std::path::PathBuf;

use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

use super::app::Config;
use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE, KEY_ENV, PREVIOUS_KEYS_ENV};
use crate::error::Result;

/// Load config from `$ENCRYPTION_CONFIG` (or `encryption.toml`), then apply
/// `$ENCRYPTION_KEY` / `$ENCRYPTION_PREVIOUS_KEYS` on top
pub fn load() -> Result<Config> {
    load_with(|name| std::env::var(name).ok())
}

/// [`load`] with an injectable variable lookup
pub fn load_with<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let path = lookup(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let mut config = if path.exists() {
        debug!(path = %path.display(), "loading encryption config");
        Config::from_path(&path)?
    } else {
        debug!(path = %path.display(), "encryption config file not found, using environment only");
        Config::default()
    };

    apply_env(&mut config, &lookup);

    if config.keys.current.is_none() && config.keys.previous.is_empty() {
        warn!("no encryption keys configured");
    }
    Ok(config)
}

fn apply_env<F>(config: &mut Config, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    // blank values never wipe what the file configured
    let non_blank = |name: &str| {
        lookup(name)
            .map(Zeroizing::new)
            .filter(|v| !v.trim().is_empty())
    };

    if let Some(key) = non_blank(KEY_ENV) {
        let mut replaced = config.keys.current.replace(key.trim().to_owned());
        replaced.zeroize();
    }
    if let Some(list) = non_blank(PREVIOUS_KEYS_ENV) {
        let keys: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_owned)
            .collect();
        if !keys.is_empty() {
            let mut replaced = std::mem::replace(&mut config.keys.previous, keys);
            replaced.zeroize();
        }
    }
}
