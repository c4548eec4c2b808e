//! The `browse` command: drive a [`PageDirectory`] for a fixed number of
//! windows and render the visible cards.

use std::fmt::Write as _;

use adl_app::{DirectoryView, PageCard, PageDirectory};
use adl_core::{CountryScope, PageFilter};
use tracing::{info, info_span, warn, Instrument};

/// Options of one `browse` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseOptions {
    /// Country code or `All`.
    pub country: String,
    pub search: String,
    pub high_reach_only: bool,
    /// Windows to load, counting the first one. At least 1.
    pub windows: u32,
}

impl BrowseOptions {
    pub fn filter(&self) -> PageFilter {
        PageFilter::new(CountryScope::parse(&self.country), self.search.clone())
    }
}

/// Loads up to `options.windows` windows and applies the reach toggle.
///
/// Stops early when the directory is exhausted or a fetch fails; the returned
/// view carries the error, if any.
pub async fn run_browse(directory: &PageDirectory, options: &BrowseOptions) -> DirectoryView {
    let filter = options.filter();
    let span = info_span!(
        "browse",
        country = %filter.country(),
        search = filter.search_term(),
        windows = options.windows,
    );

    async move {
        let mut view = directory.set_filter(filter).await;
        let mut loaded = 1;
        while loaded < options.windows && view.has_more && view.error.is_none() {
            view = directory.load_more().await;
            loaded += 1;
        }

        if let Some(error) = &view.error {
            warn!(error = %error, pages = view.pages.len(), "Browse stopped on fetch error");
        }

        let view = directory.set_high_reach_only(options.high_reach_only).await;
        info!(
            loaded = view.pages.len(),
            visible = view.visible_pages().count(),
            has_more = view.has_more,
            "Browse finished"
        );
        view
    }
    .instrument(span)
    .await
}

/// Cards for the pages visible under the view's reach toggle.
pub fn visible_cards(view: &DirectoryView) -> Vec<PageCard> {
    view.visible_pages().map(PageCard::from_summary).collect()
}

pub fn render_json(view: &DirectoryView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&visible_cards(view))
}

pub fn render_text(view: &DirectoryView) -> String {
    let cards = visible_cards(view);
    let mut out = String::new();

    if cards.is_empty() {
        out.push_str("No pages found.\n");
    }

    for (rank, card) in cards.iter().enumerate() {
        let media = card
            .media
            .as_ref()
            .map(|m| m.kind.as_str().to_string())
            .unwrap_or_else(|| "No Media".to_string());
        let _ = writeln!(out, "{:>4}. {}", rank + 1, card.page_name);
        let _ = writeln!(out, "      beneficiary: {}", card.beneficiary);
        let _ = writeln!(out, "      reach: {}   media: {}", card.formatted_reach, media);
        if let Some(url) = &card.snapshot_url {
            let _ = writeln!(out, "      snapshot: {url}");
        }
    }

    let _ = write!(out, "\n{} of {} loaded pages shown", cards.len(), view.pages.len());
    if view.has_more {
        out.push_str(" (more available)");
    }
    out.push('\n');
    out
}
