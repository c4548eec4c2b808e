//! Business logic use cases
//!
//! setFilter / refresh / loadMore / retry
//!         ↓
//! PageDirectory (async façade, one filter context)
//!         ↓
//! PageAccumulator (state machine, request tokens)
//!         ↓
//! FetchPageWindow → PageRepositoryPort

pub mod directory;
pub mod fetch_page_window;

pub use directory::{DirectoryView, FetchTicket, LoadState, PageAccumulator, PageDirectory};
pub use fetch_page_window::{FetchPageWindow, FetchWindowError};
