mod executor;
mod mapper;

pub use executor::RestExecutor;
pub use mapper::RowMapper;
