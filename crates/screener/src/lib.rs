pub mod catalog;
pub mod filter;

pub use filter::{PriceBracket, RESULT_LIMIT, ScreenerQuery, filter};
