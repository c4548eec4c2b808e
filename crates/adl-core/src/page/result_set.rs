use std::collections::HashSet;

use super::PageSummary;
use crate::ids::PageId;

/// Normalized rows of one fetch window.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedWindow {
    pub cursor: u32,
    pub page_size: u32,
    pub pages: Vec<PageSummary>,
}

impl FetchedWindow {
    pub fn new(cursor: u32, page_size: u32, pages: Vec<PageSummary>) -> Self {
        Self {
            cursor,
            page_size,
            pages,
        }
    }

    pub fn row_count(&self) -> usize {
        self.pages.len()
    }

    /// Short-window heuristic: a full window means more rows may exist.
    ///
    /// A last window that happens to be exactly `page_size` long reports `true`;
    /// the next fetch then comes back empty and settles it.
    pub fn has_more(&self) -> bool {
        self.row_count() >= self.page_size as usize
    }
}

/// Ordered, growing sequence of summaries for one filter, plus the exhaustion flag.
///
/// Windows are contiguous ranges of one global `total_eu_reach DESC` order, so
/// appending keeps the sequence non-increasing by reach.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageResultSet {
    pages: Vec<PageSummary>,
    has_more: bool,
}

impl PageResultSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[PageSummary] {
        &self.pages
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
        self.has_more = false;
    }

    /// Makes `window` the whole sequence.
    pub fn replace(&mut self, window: FetchedWindow) {
        self.has_more = window.has_more();
        self.pages = window.pages;
    }

    /// Appends `window`, skipping pages already present.
    ///
    /// Returns the number of skipped pages. Disjoint offset windows never overlap
    /// under a stable order, so a non-zero count means the store reordered rows
    /// between fetches.
    pub fn append(&mut self, window: FetchedWindow) -> usize {
        self.has_more = window.has_more();

        let mut seen: HashSet<PageId> = self.pages.iter().map(|p| p.page_id.clone()).collect();
        let mut skipped = 0;
        for page in window.pages {
            if seen.insert(page.page_id.clone()) {
                self.pages.push(page);
            } else {
                #[cfg(feature = "tracing")]
                tracing::warn!(page_id = %page.page_id, "Dropping page already present in result set");
                skipped += 1;
            }
        }
        skipped
    }
}
