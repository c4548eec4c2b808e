use async_trait::async_trait;

use crate::page::PageSummary;
use crate::ports::StoreError;
use crate::query::PageQuery;

/// PageRepositoryPort
///
/// Read-only access to the joined page directory.
///
/// Contract:
/// - executes `query` as a single request, no retries
/// - returns one normalized [`PageSummary`] per returned row, in store order
///   (`total_eu_reach` descending)
/// - returns at most `query.window_len()` rows; fewer means the order is exhausted
#[async_trait]
pub trait PageRepositoryPort: Send + Sync {
    async fn fetch_window(&self, query: &PageQuery) -> Result<Vec<PageSummary>, StoreError>;
}
