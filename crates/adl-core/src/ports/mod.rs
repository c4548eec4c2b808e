//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and infrastructure
//! implementations, keeping the directory logic independent of the store.

pub mod errors;
mod page_repository;

pub use errors::StoreError;
pub use page_repository::PageRepositoryPort;
