//! Normalized page data consumed by the presentation layer.

mod reach;
mod result_set;
mod summary;

pub use reach::{ReachFilter, HIGH_REACH_THRESHOLD};
pub use result_set::{FetchedWindow, PageResultSet};
pub use summary::{MediaType, PageSummary, TopCreative};
