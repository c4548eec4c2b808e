use adl_core::{FetchedWindow, PageFilter, PageResultSet};
use tracing::{debug, warn};

/// Fetch lifecycle of the accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    Idle,
    /// A fetch for window `cursor` is in flight.
    Loading { cursor: u32 },
    Loaded,
    /// The fetch for window `cursor` failed; `retry` re-issues it.
    Error { message: String, cursor: u32 },
}

/// Handed out when a fetch is issued and handed back with its outcome.
///
/// `token` increases with every issued fetch; only the newest one is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub filter: PageFilter,
    pub cursor: u32,
}

/// What `complete` did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The ticket was superseded; the outcome was dropped.
    Stale,
}

/// Pagination state machine for one filter context.
///
/// Owns the result set and the cursor. Issuing a fetch (`reset`, `load_more`,
/// `retry`) and applying its outcome (`complete`) are separate steps so the
/// caller can await the store in between without holding this value locked.
#[derive(Debug)]
pub struct PageAccumulator {
    filter: PageFilter,
    results: PageResultSet,
    /// Windows loaded so far under `filter`; also the next cursor to fetch.
    loaded_windows: u32,
    state: LoadState,
    last_token: u64,
    in_flight: Option<u64>,
}

impl PageAccumulator {
    pub fn new(filter: PageFilter) -> Self {
        Self {
            filter,
            results: PageResultSet::empty(),
            loaded_windows: 0,
            state: LoadState::Idle,
            last_token: 0,
            in_flight: None,
        }
    }

    pub fn filter(&self) -> &PageFilter {
        &self.filter
    }

    pub fn results(&self) -> &PageResultSet {
        &self.results
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }

    pub fn has_more(&self) -> bool {
        self.results.has_more()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Switches to `next`.
    ///
    /// Returns `None` when `next` equals the current filter and a load already
    /// happened or is happening; otherwise resets.
    pub fn apply_filter(&mut self, next: PageFilter) -> Option<FetchTicket> {
        if next == self.filter && self.state != LoadState::Idle {
            return None;
        }
        Some(self.reset(next))
    }

    /// Clears the sequence and issues window 0 for `filter`, superseding any
    /// fetch still in flight.
    pub fn reset(&mut self, filter: PageFilter) -> FetchTicket {
        self.filter = filter;
        self.results.clear();
        self.loaded_windows = 0;
        self.issue(0)
    }

    /// Issues the next window, unless exhausted, idle or already loading.
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if self.is_loading() || self.state == LoadState::Idle || !self.results.has_more() {
            return None;
        }
        Some(self.issue(self.loaded_windows))
    }

    /// Re-issues the window that failed. No-op outside the error state.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        match self.state {
            LoadState::Error { cursor, .. } => Some(self.issue(cursor)),
            _ => None,
        }
    }

    /// Applies the outcome of `ticket`'s fetch.
    ///
    /// Window 0 replaces the sequence, later windows append. A failed window 0
    /// leaves the sequence empty; a failed later window keeps what was loaded.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<FetchedWindow, String>,
    ) -> Completion {
        if self.in_flight != Some(ticket.token) {
            debug!(
                token = ticket.token,
                cursor = ticket.cursor,
                "Discarding stale fetch result"
            );
            return Completion::Stale;
        }
        self.in_flight = None;

        match outcome {
            Ok(window) => {
                if ticket.cursor == 0 {
                    self.results.replace(window);
                } else {
                    let skipped = self.results.append(window);
                    if skipped > 0 {
                        warn!(skipped, cursor = ticket.cursor, "Window overlapped loaded pages");
                    }
                }
                self.loaded_windows = ticket.cursor + 1;
                self.state = LoadState::Loaded;
            }
            Err(message) => {
                if ticket.cursor == 0 {
                    self.results.clear();
                }
                warn!(cursor = ticket.cursor, error = %message, "Page window fetch failed");
                self.state = LoadState::Error {
                    message,
                    cursor: ticket.cursor,
                };
            }
        }
        Completion::Applied
    }

    fn issue(&mut self, cursor: u32) -> FetchTicket {
        self.last_token += 1;
        self.in_flight = Some(self.last_token);
        self.state = LoadState::Loading { cursor };
        FetchTicket {
            token: self.last_token,
            filter: self.filter.clone(),
            cursor,
        }
    }
}
