use serde::{Deserialize, Serialize};

use crate::analysis::GroupAccumulator;
use crate::models::{Direction, TradeRecord};
use crate::stats::closed_by_close_time;

/// Aggregate for one side (long or short).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideStats {
    pub total_trades: usize,
    pub win_trades: usize,
    pub lose_trades: usize,
    #[serde(rename = "totalPnL")]
    pub total_pnl: f64,
    #[serde(rename = "avgPnL")]
    pub avg_pnl: f64,
    pub win_rate: f64,
    pub total_volume: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionBreakdown {
    pub long: SideStats,
    pub short: SideStats,
}

/// Long/short performance split. Every closed trade lands on exactly one
/// side, so the two sides partition the closed subset.
pub fn direction_breakdown(trades: &[TradeRecord]) -> DirectionBreakdown {
    let mut long = GroupAccumulator::default();
    let mut short = GroupAccumulator::default();

    for trade in closed_by_close_time(trades) {
        match trade.direction {
            Direction::Long => long.add(trade),
            Direction::Short => short.add(trade),
        }
    }

    DirectionBreakdown {
        long: side_stats(long),
        short: side_stats(short),
    }
}

fn side_stats(acc: GroupAccumulator) -> SideStats {
    SideStats {
        total_trades: acc.total,
        win_trades: acc.wins,
        lose_trades: acc.losses,
        total_pnl: acc.pnl,
        avg_pnl: acc.avg_pnl(),
        win_rate: acc.win_rate(),
        total_volume: acc.volume,
    }
}
