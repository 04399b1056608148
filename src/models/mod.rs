pub mod direction;
pub mod trade;

pub use direction::*;
pub use trade::{weighted_average_price, PriceLevel, TradeRecord};
