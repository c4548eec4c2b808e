//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration data structures and the TOML → DTO mapping.
//!
//! > **This module contains data only, no policy, no validation.**
//!
//! Defaults such as the page size fallback are applied by the wiring code.

mod app_config;

pub use app_config::{AppConfig, DirectoryConfig, LoggingConfig, StoreConfig};
