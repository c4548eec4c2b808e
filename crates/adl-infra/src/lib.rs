pub mod rest;

pub use rest::executor::PostgrestExecutor;
pub use rest::mappers::PageSummaryRowMapper;
pub use rest::repositories::PostgrestPageRepository;
