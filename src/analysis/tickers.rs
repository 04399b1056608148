use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::analysis::GroupAccumulator;
use crate::models::TradeRecord;
use crate::stats::closed_by_close_time;

/// Aggregate for one traded symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerStats {
    pub symbol: String,
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

/// Per-symbol breakdown for the tickers table. The dashboard always renders
/// at least `min_rows` rows, so short result sets are padded with blank
/// placeholder rows; longer lists are paged with `page`.
#[derive(Debug, Clone, Copy)]
pub struct TickerAnalyzer {
    pub min_rows: usize,
}

impl TickerAnalyzer {
    pub fn new(min_rows: usize) -> Self {
        Self { min_rows }
    }

    /// Full per-symbol breakdown, descending by total pnl, padded to
    /// `min_rows`.
    pub fn analyze(&self, trades: &[TradeRecord]) -> Vec<TickerStats> {
        let mut out = self.ranked(trades);
        self.pad(&mut out);
        out
    }

    /// The `[offset, offset + limit)` window of the ranked list. Only a
    /// short final page gets padded, so earlier pages stay full-length.
    pub fn page(&self, trades: &[TradeRecord], offset: usize, limit: usize) -> Vec<TickerStats> {
        let ranked = self.ranked(trades);
        let start = offset.min(ranked.len());
        let end = (offset + limit).min(ranked.len());

        let mut window = ranked[start..end].to_vec();
        if window.len() < limit && window.len() < self.min_rows {
            self.pad(&mut window);
        }
        window
    }

    fn ranked(&self, trades: &[TradeRecord]) -> Vec<TickerStats> {
        let mut buckets: HashMap<&str, GroupAccumulator> = HashMap::new();
        for trade in closed_by_close_time(trades) {
            buckets.entry(trade.symbol.as_str()).or_default().add(trade);
        }

        let mut out: Vec<TickerStats> = buckets
            .into_iter()
            .map(|(symbol, acc)| TickerStats {
                symbol: symbol.to_string(),
                total_trades: acc.total,
                win_trades: acc.wins,
                lose_trades: acc.losses,
                total_pnl: acc.pnl,
                avg_pnl: acc.avg_pnl(),
                win_rate: acc.win_rate(),
                total_volume: acc.volume,
            })
            .collect();

        out.sort_by(|a, b| {
            b.total_pnl
                .partial_cmp(&a.total_pnl)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });
        out
    }

    fn pad(&self, rows: &mut Vec<TickerStats>) {
        while rows.len() < self.min_rows {
            rows.push(TickerStats::default());
        }
    }
}
