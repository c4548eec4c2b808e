//! PostgREST (Supabase) backed page store.
//!
//! Request flow: [`adl_core::PageQuery`] → [`params::to_params`] →
//! [`executor::PostgrestExecutor`] → [`models::PageRow`] →
//! [`mappers::PageSummaryRowMapper`] → [`adl_core::PageSummary`].

pub mod executor;
pub mod mappers;
pub mod models;
pub mod params;
pub mod ports;
pub mod repositories;
