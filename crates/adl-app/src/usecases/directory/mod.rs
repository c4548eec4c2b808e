//! Pagination accumulator and the directory façade built on it.

mod accumulator;
mod page_directory;

pub use accumulator::{Completion, FetchTicket, LoadState, PageAccumulator};
pub use page_directory::{DirectoryView, PageDirectory};
