//! ID and code wrappers for type safety.

mod country_code;
mod page_id;

pub use country_code::CountryCode;
pub use page_id::PageId;
