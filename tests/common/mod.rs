use chrono::{DateTime, Duration, Utc};

use journal_stats::models::{Direction, TradeRecord};

pub fn parse(ts: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc)
}

/// A closed long trade with the given pnl and RFC 3339 close time.
pub fn closed_trade(symbol: &str, pnl: f64, close_time: &str) -> TradeRecord {
    let close = parse(close_time);
    TradeRecord {
        symbol: symbol.to_string(),
        direction: Direction::Long,
        pnl: Some(pnl),
        fee_amount: None,
        open_fee_amount: None,
        close_fee_amount: None,
        total_quantity: None,
        quantity_usd: None,
        open_time: close - Duration::hours(1),
        close_time: Some(close),
        reason: Vec::new(),
        rules_followed: Vec::new(),
        learnings: None,
        entries: Vec::new(),
        exits: Vec::new(),
        stop_losses: Vec::new(),
        take_profits: Vec::new(),
    }
}

/// Closed trades with the given pnls, one hour apart, chronological.
pub fn trades_with_pnls(pnls: &[f64]) -> Vec<TradeRecord> {
    let base = parse("2024-01-15T06:00:00Z");
    pnls.iter()
        .enumerate()
        .map(|(i, &pnl)| {
            let mut t = closed_trade("BTC-USD", pnl, "2024-01-15T06:00:00Z");
            let close = base + Duration::hours(i as i64);
            t.open_time = close - Duration::minutes(30);
            t.close_time = Some(close);
            t
        })
        .collect()
}
