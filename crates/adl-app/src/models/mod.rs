mod page_card;

pub use page_card::{format_reach, CardMedia, PageCard, UNKNOWN_BENEFICIARY};
