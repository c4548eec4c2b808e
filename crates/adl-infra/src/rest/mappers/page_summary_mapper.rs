use adl_core::{MediaType, PageId, PageSummary, TopCreative};
use anyhow::Result;

use crate::rest::models::{Nested, PageRow};
use crate::rest::ports::RowMapper;

/// Collapses a joined row into one canonical [`PageSummary`].
///
/// Every embed goes through [`Nested::first`], so object-shaped and
/// array-shaped relations normalize identically. When several ads match, the
/// beneficiary of the first one is used.
pub struct PageSummaryRowMapper;

impl RowMapper<PageRow, PageSummary> for PageSummaryRowMapper {
    fn to_domain(&self, row: &PageRow) -> Result<PageSummary> {
        let beneficiary = row
            .ads
            .as_ref()
            .and_then(Nested::first)
            .and_then(|ad| ad.beneficiary.clone());

        let top_creative = row
            .page_top_creatives
            .as_ref()
            .and_then(Nested::first)
            .map(|creative| TopCreative {
                media_url: creative.media_url.clone(),
                media_type: MediaType::from_raw(creative.media_type.as_deref()),
                snapshot_url: creative
                    .ads
                    .as_ref()
                    .and_then(Nested::first)
                    .and_then(|ad| ad.ad_snapshot_url.clone()),
            });

        Ok(PageSummary {
            page_id: PageId::from(row.page_id.clone()),
            name: row.name.clone().unwrap_or_default(),
            country: row.country.clone(),
            total_eu_reach: row.total_eu_reach.unwrap_or(0),
            beneficiary,
            top_creative,
            passthrough: row.rest.clone(),
        })
    }
}
