//! Ad Library Directory Orchestration Layer
//!
//! Use cases that turn filter changes and "load more" requests into fetch windows
//! and keep the accumulated page sequence consistent.

pub mod models;
pub mod usecases;

pub use models::PageCard;
pub use usecases::{DirectoryView, FetchPageWindow, LoadState, PageAccumulator, PageDirectory};
