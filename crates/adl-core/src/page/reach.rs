use super::PageSummary;

/// Minimum `total_eu_reach` kept when the high-reach toggle is on.
pub const HIGH_REACH_THRESHOLD: u64 = 900_000;

/// Client-side reach predicate.
///
/// Applied as a view over an already fetched sequence. Changing it never
/// re-fetches and never touches pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReachFilter {
    high_reach_only: bool,
}

impl ReachFilter {
    pub fn new(high_reach_only: bool) -> Self {
        Self { high_reach_only }
    }

    pub fn high_reach_only(&self) -> bool {
        self.high_reach_only
    }

    pub fn keep(&self, summary: &PageSummary) -> bool {
        !self.high_reach_only || summary.total_eu_reach >= HIGH_REACH_THRESHOLD
    }

    /// Order-preserving projection of `pages`.
    pub fn apply<'a, I>(self, pages: I) -> impl Iterator<Item = &'a PageSummary>
    where
        I: IntoIterator<Item = &'a PageSummary>,
    {
        pages.into_iter().filter(move |summary| self.keep(summary))
    }
}
