//! # Configuration Loader
//!
//! Reads the TOML file into the [`AppConfig`] DTO and layers the `SUPABASE_URL` /
//! `SUPABASE_KEY` environment variables (optionally from a `.env` file) on top.
//!
//! No validation and no defaults happen here. Empty values are facts; the
//! wiring step decides what they mean.

use anyhow::Context;
use std::path::PathBuf;

use adl_core::config::AppConfig;

pub const ENV_STORE_URL: &str = "SUPABASE_URL";
pub const ENV_STORE_KEY: &str = "SUPABASE_KEY";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
/// - TOML structure is malformed (mapping error)
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let raw = std::fs::read_to_string(&config_path).with_context(|| {
        format!("Failed to read directory config {}", config_path.display())
    })?;
    let document: toml::Value = toml::from_str(&raw).with_context(|| {
        format!(
            "Config {} is not valid TOML (expected [store], [directory] and [logging] tables)",
            config_path.display()
        )
    })?;
    AppConfig::from_toml(&document).with_context(|| {
        format!(
            "Config {} has a malformed [store] or [directory] value (store.timeout_secs and directory.page_size must be non-negative integers)",
            config_path.display()
        )
    })
}

/// Overwrites store credentials with the given values when they are present.
pub fn apply_store_overrides(config: &mut AppConfig, url: Option<String>, api_key: Option<String>) {
    if let Some(url) = url {
        config.store.url = url;
    }
    if let Some(api_key) = api_key {
        config.store.api_key = api_key;
    }
}

/// Loads `config_path` (or starts empty) and applies environment overrides.
///
/// A missing `.env` file is not an error.
pub fn resolve_config(config_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => AppConfig::empty(),
    };

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("Failed to read .env file");
        }
    }

    apply_store_overrides(
        &mut config,
        std::env::var(ENV_STORE_URL).ok(),
        std::env::var(ENV_STORE_KEY).ok(),
    );
    Ok(config)
}
