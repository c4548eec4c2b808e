//! Ad library page directory.
//!
//! Application shell over the workspace crates: configuration and logging
//! bootstrap, dependency wiring, and the `browse` command used by the binary.

pub mod bootstrap;
pub mod browse;

pub use browse::{render_json, render_text, run_browse, BrowseOptions};
