use adl_core::ports::{PageRepositoryPort, StoreError};
use adl_core::{PageQuery, PageSummary};
use tracing::debug;

use crate::rest::models::PageRow;
use crate::rest::params::{to_params, PAGES_RESOURCE};
use crate::rest::ports::{RestExecutor, RowMapper};

pub struct PostgrestPageRepository<E, M> {
    executor: E,
    row_mapper: M,
}

impl<E, M> PostgrestPageRepository<E, M> {
    pub fn new(executor: E, row_mapper: M) -> Self {
        Self {
            executor,
            row_mapper,
        }
    }
}

#[async_trait::async_trait]
impl<E, M> PageRepositoryPort for PostgrestPageRepository<E, M>
where
    E: RestExecutor,
    M: RowMapper<PageRow, PageSummary>,
{
    async fn fetch_window(&self, query: &PageQuery) -> Result<Vec<PageSummary>, StoreError> {
        let params = to_params(query);
        let rows: Vec<PageRow> = self.executor.select(PAGES_RESOURCE, &params).await?;

        debug!(
            rows = rows.len(),
            offset = query.range.offset(),
            limit = query.range.limit(),
            "Fetched page rows"
        );

        rows.iter()
            .map(|row| {
                self.row_mapper
                    .to_domain(row)
                    .map_err(|e| StoreError::decode(format!("page {}: {}", row.page_id, e)))
            })
            .collect()
    }
}
