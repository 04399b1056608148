pub mod daily;
pub mod overview;
pub mod sentiment;
pub mod streak;
pub mod time_buckets;

pub use daily::{DailyPnl, DailyVolume};
pub use overview::{StatsAggregator, StatsResult};
pub use sentiment::GreedFear;

use crate::models::TradeRecord;

/// Streak and greed/fear look at the most recent trades only.
pub const TAIL_WINDOW: usize = 10;

/// The closed subset every statistic is computed over, stable-sorted by
/// close time ascending. Sorting here makes the tail-window statistics
/// (streak, greed/fear) independent of the caller's array ordering.
pub(crate) fn closed_by_close_time(trades: &[TradeRecord]) -> Vec<&TradeRecord> {
    let mut closed: Vec<&TradeRecord> = trades.iter().filter(|t| t.is_closed()).collect();
    closed.sort_by_key(|t| t.close_time);
    closed
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
