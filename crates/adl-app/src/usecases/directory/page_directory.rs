use adl_core::{PageFilter, PageSummary, ReachFilter};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::accumulator::{Completion, FetchTicket, PageAccumulator};
use crate::usecases::FetchPageWindow;

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryView {
    /// Full accumulated sequence, independent of the reach toggle.
    pub pages: Vec<PageSummary>,
    pub loading: bool,
    pub error: Option<String>,
    pub has_more: bool,
    pub high_reach_only: bool,
}

impl DirectoryView {
    /// `pages` as shown with the current reach toggle.
    pub fn visible_pages(&self) -> impl Iterator<Item = &PageSummary> {
        ReachFilter::new(self.high_reach_only).apply(&self.pages)
    }
}

struct DirectoryState {
    accumulator: PageAccumulator,
    reach: ReachFilter,
}

impl DirectoryState {
    fn view(&self) -> DirectoryView {
        DirectoryView {
            pages: self.accumulator.results().pages().to_vec(),
            loading: self.accumulator.is_loading(),
            error: self.accumulator.error().map(str::to_string),
            has_more: self.accumulator.has_more(),
            high_reach_only: self.reach.high_reach_only(),
        }
    }
}

/// Browsable page directory for a single filter context.
///
/// Each operation returns the view as it stands once its own fetch (if any)
/// has completed. Operations may be called concurrently; a fetch superseded by
/// a newer filter change or refresh is discarded when it completes.
pub struct PageDirectory {
    fetch: FetchPageWindow,
    state: Mutex<DirectoryState>,
}

impl PageDirectory {
    /// Starts `Idle` with `initial`; nothing is fetched until `refresh` or
    /// `set_filter` is called.
    pub fn new(fetch: FetchPageWindow, initial: PageFilter) -> Self {
        Self {
            fetch,
            state: Mutex::new(DirectoryState {
                accumulator: PageAccumulator::new(initial),
                reach: ReachFilter::default(),
            }),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.fetch.page_size()
    }

    pub async fn filter(&self) -> PageFilter {
        self.state.lock().await.accumulator.filter().clone()
    }

    /// Replaces the filter and reloads from window 0 if it changed.
    pub async fn set_filter(&self, next: PageFilter) -> DirectoryView {
        let ticket = self.state.lock().await.accumulator.apply_filter(next);
        match &ticket {
            Some(t) => info!(country = %t.filter.country(), search = t.filter.search_term(), "Filter changed, reloading"),
            None => debug!("Filter unchanged"),
        }
        self.run(ticket).await
    }

    /// Reloads from window 0 with the current filter ("data changed").
    pub async fn refresh(&self) -> DirectoryView {
        let ticket = {
            let mut state = self.state.lock().await;
            let filter = state.accumulator.filter().clone();
            state.accumulator.reset(filter)
        };
        info!("Refreshing page directory");
        self.run(Some(ticket)).await
    }

    /// Appends the next window; no-op when exhausted or already loading.
    pub async fn load_more(&self) -> DirectoryView {
        let ticket = self.state.lock().await.accumulator.load_more();
        if ticket.is_none() {
            debug!("Load more ignored");
        }
        self.run(ticket).await
    }

    /// Re-issues the failed window; no-op unless the last fetch failed.
    pub async fn retry(&self) -> DirectoryView {
        let ticket = self.state.lock().await.accumulator.retry();
        self.run(ticket).await
    }

    /// Toggles the client-side reach filter. Never fetches.
    pub async fn set_high_reach_only(&self, high_reach_only: bool) -> DirectoryView {
        let mut state = self.state.lock().await;
        state.reach = ReachFilter::new(high_reach_only);
        state.view()
    }

    pub async fn view(&self) -> DirectoryView {
        self.state.lock().await.view()
    }

    async fn run(&self, ticket: Option<FetchTicket>) -> DirectoryView {
        let Some(ticket) = ticket else {
            return self.view().await;
        };

        let outcome = self
            .fetch
            .execute(&ticket.filter, ticket.cursor)
            .await
            .map_err(|e| e.to_string());

        let mut state = self.state.lock().await;
        if state.accumulator.complete(&ticket, outcome) == Completion::Stale {
            info!(cursor = ticket.cursor, "Superseded fetch result dropped");
        }
        state.view()
    }
}
