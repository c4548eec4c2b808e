//! # Dependency Injection
//!
//! The only place that depends on `adl-infra` and `adl-app` together. It turns
//! the loaded [`AppConfig`] into a ready [`PageDirectory`]:
//!
//! `PostgrestExecutor` → `PostgrestPageRepository` → `FetchPageWindow` → `PageDirectory`
//!
//! Unset numeric settings (`0`) fall back to defaults here. Missing store
//! credentials are a startup error.

use std::sync::Arc;
use std::time::Duration;

use adl_app::{FetchPageWindow, PageDirectory};
use adl_core::config::AppConfig;
use adl_core::ports::PageRepositoryPort;
use adl_core::{PageFilter, DEFAULT_PAGE_SIZE};
use adl_infra::{PageSummaryRowMapper, PostgrestExecutor, PostgrestPageRepository};
use tracing::info;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors while assembling the directory
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Missing setting: {0}")]
    MissingSetting(&'static str),

    #[error("Store client initialization failed: {0}")]
    StoreInit(String),

    #[error("Invalid directory settings: {0}")]
    Directory(String),
}

/// Rows per window, with `0` meaning the default.
pub fn effective_page_size(config: &AppConfig) -> u32 {
    match config.directory.page_size {
        0 => DEFAULT_PAGE_SIZE,
        n => n,
    }
}

pub fn effective_timeout(config: &AppConfig) -> Duration {
    match config.store.timeout_secs {
        0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        n => Duration::from_secs(n),
    }
}

/// Creates the REST-backed page repository.
pub fn create_page_repository(config: &AppConfig) -> WiringResult<Arc<dyn PageRepositoryPort>> {
    if config.store.url.trim().is_empty() {
        return Err(WiringError::MissingSetting("store.url (or SUPABASE_URL)"));
    }
    if config.store.api_key.trim().is_empty() {
        return Err(WiringError::MissingSetting("store.api_key (or SUPABASE_KEY)"));
    }

    let executor = PostgrestExecutor::new(
        &config.store.url,
        config.store.api_key.clone(),
        effective_timeout(config),
    )
    .map_err(|e| WiringError::StoreInit(e.to_string()))?;

    info!(rest_url = executor.rest_url(), "Page store configured");
    let page_repo: Arc<dyn PageRepositoryPort> =
        Arc::new(PostgrestPageRepository::new(executor, PageSummaryRowMapper));
    Ok(page_repo)
}

/// Assembles a directory over `page_repo` starting at `initial`.
pub fn wire_directory(
    page_repo: Arc<dyn PageRepositoryPort>,
    page_size: u32,
    initial: PageFilter,
) -> WiringResult<PageDirectory> {
    let fetch = FetchPageWindow::new(page_repo, page_size)
        .map_err(|e| WiringError::Directory(e.to_string()))?;
    Ok(PageDirectory::new(fetch, initial))
}

/// Builds the directory from configuration.
pub fn build_directory(config: &AppConfig, initial: PageFilter) -> WiringResult<PageDirectory> {
    let page_repo = create_page_repository(config)?;
    wire_directory(page_repo, effective_page_size(config), initial)
}
