use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::analysis::tags::{tag_analysis_closed, TagStats};
use crate::models::TradeRecord;
use crate::stats::daily::{daily_series, DailyPnl, DailyVolume};
use crate::stats::sentiment::{greed_fear, GreedFear};
use crate::stats::streak::current_streak;
use crate::stats::time_buckets::best_and_worst;
use crate::stats::{closed_by_close_time, round2};

pub const NOT_AVAILABLE: &str = "Not available";

/// Dashboard statistics derived from a user's trade list. Field names are
/// the journal document/API names the front-end binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    #[serde(rename = "netPnL")]
    pub net_pnl: f64,
    pub max_profit: f64,
    pub max_loss: f64,
    pub total_trades: usize,
    pub total_fees: f64,
    pub total_volume: f64,
    pub win_trades: usize,
    pub lose_trades: usize,
    /// Percentage, 2 decimals.
    pub win_ratio: f64,
    #[serde(rename = "averagePnL")]
    pub average_pnl: f64,
    /// `"<count> <win|loss|break-even>"`, or `"0"` with no closed trades.
    pub streak: String,
    pub total_symbols: usize,
    /// Time-of-day bucket name, or "Not available".
    pub best_time: String,
    pub worst_time: String,
    pub daily_data: Vec<DailyPnl>,
    pub daily_volume_data: Vec<DailyVolume>,
    pub greed_fear: GreedFear,
    pub tag_analysis: Vec<TagStats>,
}

impl Default for StatsResult {
    fn default() -> Self {
        Self {
            net_pnl: 0.0,
            max_profit: 0.0,
            max_loss: 0.0,
            total_trades: 0,
            total_fees: 0.0,
            total_volume: 0.0,
            win_trades: 0,
            lose_trades: 0,
            win_ratio: 0.0,
            average_pnl: 0.0,
            streak: "0".to_string(),
            total_symbols: 0,
            best_time: NOT_AVAILABLE.to_string(),
            worst_time: NOT_AVAILABLE.to_string(),
            daily_data: Vec::new(),
            daily_volume_data: Vec::new(),
            greed_fear: GreedFear::default(),
            tag_analysis: Vec::new(),
        }
    }
}

/// Pure projection from a trade list to `StatsResult`. Only trades with a
/// close time count; open trades are invisible to every statistic. The
/// closed subset is sorted by close time before the tail-window statistics
/// are taken, so results do not depend on the caller's array ordering (a
/// deliberate change from the original journal, which used insertion order).
#[derive(Debug, Clone, Copy)]
pub struct StatsAggregator {
    pub timezone: Tz,
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::UTC,
        }
    }
}

impl StatsAggregator {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Total over any input: empty or degenerate trade lists produce the
    /// zero-valued `StatsResult::default()`, never an error, and no division
    /// ever yields NaN or infinity.
    pub fn compute(&self, trades: &[TradeRecord]) -> StatsResult {
        let closed = closed_by_close_time(trades);
        if closed.is_empty() {
            return StatsResult::default();
        }

        let total_trades = closed.len();
        let mut net_pnl = 0.0;
        let mut max_profit = 0.0f64;
        let mut max_loss = 0.0f64;
        let mut total_fees = 0.0;
        let mut total_volume = 0.0;
        let mut win_trades = 0;
        let mut lose_trades = 0;
        let mut symbols: HashSet<&str> = HashSet::new();

        for trade in &closed {
            let pnl = trade.pnl_or_zero();
            net_pnl += pnl;
            total_fees += trade.fee_or_zero();
            total_volume += trade.quantity_or_zero();
            symbols.insert(trade.symbol.as_str());

            // Floor/ceiling at zero: with no winner maxProfit stays 0, with
            // no loser maxLoss stays 0.
            max_profit = max_profit.max(pnl);
            max_loss = max_loss.min(pnl);

            if pnl > 0.0 {
                win_trades += 1;
            } else if pnl < 0.0 {
                lose_trades += 1;
            }
        }

        let win_ratio = round2(win_trades as f64 / total_trades as f64 * 100.0);
        let average_pnl = round2(net_pnl / total_trades as f64);

        let (best, worst) = best_and_worst(&closed, &self.timezone);
        let (daily_data, daily_volume_data) = daily_series(&closed, &self.timezone);

        StatsResult {
            net_pnl,
            max_profit,
            max_loss,
            total_trades,
            total_fees,
            total_volume,
            win_trades,
            lose_trades,
            win_ratio,
            average_pnl,
            streak: current_streak(&closed),
            total_symbols: symbols.len(),
            best_time: best.map_or_else(|| NOT_AVAILABLE.to_string(), |b| b.to_string()),
            worst_time: worst.map_or_else(|| NOT_AVAILABLE.to_string(), |w| w.to_string()),
            daily_data,
            daily_volume_data,
            greed_fear: greed_fear(&closed),
            tag_analysis: tag_analysis_closed(&closed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;
    use crate::test_helpers::{closed_trade, open_trade, trades_with_pnls};

    #[test]
    fn empty_input_contract() {
        let stats = StatsAggregator::default().compute(&[]);

        assert_eq!(stats.total_trades, 0);
        assert_eq!(stats.net_pnl, 0.0);
        assert_eq!(stats.win_ratio, 0.0);
        assert_eq!(stats.average_pnl, 0.0);
        assert_eq!(stats.streak, "0");
        assert_eq!(stats.best_time, NOT_AVAILABLE);
        assert_eq!(stats.worst_time, NOT_AVAILABLE);
        assert_eq!(stats.greed_fear.value, 50);
        assert_eq!(stats.greed_fear.label, Sentiment::Neutral);
        assert!(stats.daily_data.is_empty());
        assert!(stats.daily_volume_data.is_empty());
        assert!(stats.tag_analysis.is_empty());
    }

    #[test]
    fn open_trades_are_excluded() {
        let mut running = open_trade("BTC-USD");
        running.pnl = Some(999.0); // set, but the trade is still open

        let trades = vec![running, closed_trade("BTC-USD", 10.0, "2024-01-15T10:00:00Z")];
        let stats = StatsAggregator::default().compute(&trades);

        assert_eq!(stats.total_trades, 1);
        assert_eq!(stats.net_pnl, 10.0);
        assert_eq!(stats.max_profit, 10.0);
    }

    #[test]
    fn scalar_aggregates() {
        let mut a = closed_trade("BTC-USD", 100.0, "2024-01-15T10:00:00Z");
        a.fee_amount = Some(1.5);
        a.total_quantity = Some(2.0);
        let mut b = closed_trade("ETH-USD", -40.0, "2024-01-16T10:00:00Z");
        b.fee_amount = Some(0.5);
        b.total_quantity = Some(1.0);
        let c = closed_trade("BTC-USD", 0.0, "2024-01-17T10:00:00Z");

        let stats = StatsAggregator::default().compute(&[a, b, c]);

        assert_eq!(stats.total_trades, 3);
        assert_eq!(stats.net_pnl, 60.0);
        assert_eq!(stats.total_fees, 2.0);
        assert_eq!(stats.total_volume, 3.0);
        assert_eq!(stats.max_profit, 100.0);
        assert_eq!(stats.max_loss, -40.0);
        assert_eq!(stats.win_trades, 1);
        assert_eq!(stats.lose_trades, 1); // break-even counts in neither
        assert_eq!(stats.win_ratio, 33.33);
        assert_eq!(stats.average_pnl, 20.0);
        assert_eq!(stats.total_symbols, 2);
    }

    #[test]
    fn max_profit_floors_at_zero_with_no_winner() {
        let trades = trades_with_pnls(&[-10.0, -20.0]);
        let stats = StatsAggregator::default().compute(&trades);

        assert_eq!(stats.max_profit, 0.0);
        assert_eq!(stats.max_loss, -20.0);
    }

    #[test]
    fn win_ratio_is_bounded() {
        let all_wins = trades_with_pnls(&[1.0, 2.0, 3.0]);
        let stats = StatsAggregator::default().compute(&all_wins);
        assert_eq!(stats.win_ratio, 100.0);

        let mixed = trades_with_pnls(&[1.0, -1.0, 0.0, 2.0]);
        let stats = StatsAggregator::default().compute(&mixed);
        assert!(stats.win_ratio >= 0.0 && stats.win_ratio <= 100.0);
    }

    #[test]
    fn net_pnl_is_order_independent() {
        let forward = trades_with_pnls(&[5.0, -3.0, 7.5, -0.25]);
        let mut reversed = forward.clone();
        reversed.reverse();

        let agg = StatsAggregator::default();
        assert_eq!(agg.compute(&forward).net_pnl, agg.compute(&reversed).net_pnl);
    }

    #[test]
    fn streak_and_sentiment_ignore_caller_ordering() {
        // Shuffled input; close times define the real sequence, which ends
        // in three wins.
        let mut trades = trades_with_pnls(&[5.0, -3.0, -1.0, 2.0, 2.0, 2.0]);
        trades.swap(0, 5);
        trades.swap(1, 3);

        let stats = StatsAggregator::default().compute(&trades);
        assert_eq!(stats.streak, "3 win");
    }

    #[test]
    fn daily_pnl_sums_to_net_pnl() {
        let trades = trades_with_pnls(&[12.0, -4.0, 3.5, 0.0, -1.25]);
        let stats = StatsAggregator::default().compute(&trades);

        let daily_sum: f64 = stats.daily_data.iter().map(|d| d.pnl).sum();
        assert!((daily_sum - stats.net_pnl).abs() < 1e-9);

        // strictly ascending, no duplicates
        for pair in stats.daily_data.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn compute_is_idempotent() {
        let trades = trades_with_pnls(&[5.0, -3.0, 0.0, 8.0]);
        let agg = StatsAggregator::default();

        let first = agg.compute(&trades);
        let second = agg.compute(&trades);
        assert_eq!(first, second);
    }

    #[test]
    fn serializes_with_legacy_field_names() {
        let trades = trades_with_pnls(&[5.0]);
        let stats = StatsAggregator::default().compute(&trades);

        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("netPnL").is_some());
        assert!(json.get("averagePnL").is_some());
        assert!(json.get("winRatio").is_some());
        assert!(json.get("greedFear").is_some());
        assert!(json.get("tagAnalysis").is_some());
        assert!(json.get("dailyVolumeData").is_some());
    }
}
