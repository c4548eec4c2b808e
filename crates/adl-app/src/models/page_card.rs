//! Display-time projection of a page summary.
//!
//! Placeholders and number formatting live here so the data model keeps
//! `None` distinct from a real value.

use adl_core::{MediaType, PageSummary};
use serde::Serialize;

/// Shown when no ad disclosed a beneficiary.
pub const UNKNOWN_BENEFICIARY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardMedia {
    pub url: String,
    pub kind: MediaType,
}

/// Card data for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageCard {
    pub page_id: String,
    pub page_name: String,
    pub beneficiary: String,
    pub total_reach: u64,
    /// Reach in space-separated thousands groups, e.g. `882 329 833`.
    pub formatted_reach: String,
    /// `None` renders the "No Media" placeholder.
    pub media: Option<CardMedia>,
    /// Opened when the card is clicked.
    pub snapshot_url: Option<String>,
}

impl PageCard {
    pub fn from_summary(summary: &PageSummary) -> Self {
        let creative = summary.top_creative.as_ref();

        Self {
            page_id: summary.page_id.to_string(),
            page_name: summary.name.clone(),
            beneficiary: summary
                .beneficiary
                .clone()
                .unwrap_or_else(|| UNKNOWN_BENEFICIARY.to_string()),
            total_reach: summary.total_eu_reach,
            formatted_reach: format_reach(summary.total_eu_reach),
            media: creative.and_then(|c| {
                c.media_url.as_ref().map(|url| CardMedia {
                    url: url.clone(),
                    kind: c.media_type.clone(),
                })
            }),
            snapshot_url: creative.and_then(|c| c.snapshot_url.clone()),
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.snapshot_url.is_some()
    }
}

pub fn format_reach(reach: u64) -> String {
    let digits = reach.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
