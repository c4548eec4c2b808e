mod page_summary_mapper;

pub use page_summary_mapper::PageSummaryRowMapper;
