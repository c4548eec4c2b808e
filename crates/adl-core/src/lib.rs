//! # adl-core
//!
//! Core domain models and query rules for the ad library page directory.
//!
//! This crate contains pure data-shape logic without any infrastructure dependencies:
//! the filter model, normalized page summaries, the query builder, the client-side
//! reach filter and the storage port implemented by `adl-infra`.

pub mod config;
pub mod filter;
pub mod ids;
pub mod page;
pub mod ports;
pub mod query;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use filter::{CountryScope, PageFilter};
pub use ids::{CountryCode, PageId};
pub use page::{
    FetchedWindow, MediaType, PageResultSet, PageSummary, ReachFilter, TopCreative,
    HIGH_REACH_THRESHOLD,
};
pub use query::{PageQuery, WindowRange, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
