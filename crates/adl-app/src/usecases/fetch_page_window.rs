use std::sync::Arc;

use adl_core::ports::{PageRepositoryPort, StoreError};
use adl_core::{FetchedWindow, PageFilter, PageQuery, MAX_PAGE_SIZE};
use tracing::{debug, info_span, Instrument};

/// Error type for the fetch window use case
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchWindowError {
    #[error("Invalid page size: {0}")]
    InvalidPageSize(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Use case for fetching one fixed-size window of the page directory.
///
/// Stateless: builds the query for `(filter, cursor)`, runs it once and wraps the
/// normalized rows. Retries are left to the caller.
pub struct FetchPageWindow {
    page_repo: Arc<dyn PageRepositoryPort>,
    page_size: u32,
}

impl FetchPageWindow {
    /// Creates the use case; `page_size` must be within `1..=MAX_PAGE_SIZE`.
    pub fn new(
        page_repo: Arc<dyn PageRepositoryPort>,
        page_size: u32,
    ) -> Result<Self, FetchWindowError> {
        if page_size == 0 {
            return Err(FetchWindowError::InvalidPageSize(format!(
                "Must be at least 1, got {}",
                page_size
            )));
        }

        if page_size > MAX_PAGE_SIZE {
            return Err(FetchWindowError::InvalidPageSize(format!(
                "Must be at most {}, got {}",
                MAX_PAGE_SIZE, page_size
            )));
        }

        Ok(Self {
            page_repo,
            page_size,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub async fn execute(
        &self,
        filter: &PageFilter,
        cursor: u32,
    ) -> Result<FetchedWindow, FetchWindowError> {
        let span = info_span!(
            "fetch_page_window",
            country = %filter.country(),
            search = filter.search_term(),
            cursor,
            page_size = self.page_size,
        );

        async move {
            let query = PageQuery::build(filter, cursor, self.page_size);
            let pages = self.page_repo.fetch_window(&query).await?;
            let window = FetchedWindow::new(cursor, self.page_size, pages);

            debug!(
                rows = window.row_count(),
                has_more = window.has_more(),
                "Fetched page window"
            );
            Ok::<_, FetchWindowError>(window)
        }
        .instrument(span)
        .await
    }
}
