use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::analysis::GroupAccumulator;
use crate::models::TradeRecord;
use crate::stats::closed_by_close_time;

/// Aggregate for one rationale tag. Tags are multi-membership: a trade with
/// N tags contributes its full pnl and win/loss increment to each of the N
/// buckets, so totals across tags may exceed the trade count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagStats {
    pub tag: String,
    pub total_trades: usize,
    pub win_trades: usize,
    pub lose_trades: usize,
    #[serde(rename = "totalPnL")]
    pub total_pnl: f64,
    #[serde(rename = "avgPnL")]
    pub avg_pnl: f64,
    pub win_rate: f64,
}

/// Per-tag breakdown over closed trades, descending by total pnl (ties
/// break alphabetically so output is deterministic).
pub fn tag_analysis(trades: &[TradeRecord]) -> Vec<TagStats> {
    tag_analysis_closed(&closed_by_close_time(trades))
}

pub(crate) fn tag_analysis_closed(closed: &[&TradeRecord]) -> Vec<TagStats> {
    let mut buckets: HashMap<&str, GroupAccumulator> = HashMap::new();

    for trade in closed {
        for tag in &trade.reason {
            buckets.entry(tag.as_str()).or_default().add(trade);
        }
    }

    let mut out: Vec<TagStats> = buckets
        .into_iter()
        .map(|(tag, acc)| TagStats {
            tag: tag.to_string(),
            total_trades: acc.total,
            win_trades: acc.wins,
            lose_trades: acc.losses,
            total_pnl: acc.pnl,
            avg_pnl: acc.avg_pnl(),
            win_rate: acc.win_rate(),
        })
        .collect();

    out.sort_by(|a, b| {
        b.total_pnl
            .partial_cmp(&a.total_pnl)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.tag.cmp(&b.tag))
    });
    out
}
