//! Query builder: filter model + cursor → one relational fetch request.
//!
//! The request is store-agnostic; `adl-infra` renders it for the REST store.

mod builder;
mod range;

pub use builder::{Join, PageColumn, PageQuery, Predicate, Relation, SortOrder};
pub use range::WindowRange;

/// Default window length.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Business rule: at most this many rows per window.
pub const MAX_PAGE_SIZE: u32 = 1000;
