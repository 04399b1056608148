pub mod calendar;
pub mod direction;
pub mod tags;
pub mod tickers;

pub use calendar::{calendar_days, CalendarDay};
pub use direction::{direction_breakdown, DirectionBreakdown, SideStats};
pub use tags::{tag_analysis, TagStats};
pub use tickers::{TickerAnalyzer, TickerStats};

use crate::models::TradeRecord;
use crate::stats::round2;

/// Count/pnl/win/loss accumulator shared by every grouped breakdown. The
/// breakdowns differ only in their grouping key (tag, symbol, direction,
/// calendar date).
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GroupAccumulator {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub pnl: f64,
    pub volume: f64,
}

impl GroupAccumulator {
    pub fn add(&mut self, trade: &TradeRecord) {
        let pnl = trade.pnl_or_zero();
        self.total += 1;
        self.pnl += pnl;
        self.volume += trade.quantity_or_zero();
        if pnl > 0.0 {
            self.wins += 1;
        } else if pnl < 0.0 {
            self.losses += 1;
        }
    }

    pub fn avg_pnl(&self) -> f64 {
        if self.total > 0 {
            round2(self.pnl / self.total as f64)
        } else {
            0.0
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.total > 0 {
            round2(self.wins as f64 / self.total as f64 * 100.0)
        } else {
            0.0
        }
    }
}
