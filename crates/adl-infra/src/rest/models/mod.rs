mod nested;
mod page_row;

pub use nested::Nested;
pub use page_row::{AdRow, CreativeRow, PageRow, SnapshotAdRow};
