use chrono::{DateTime, Duration, Utc};

use crate::models::{Direction, PriceLevel, PriceMode, TradeRecord};

fn parse(ts: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc)
}

fn base_trade(symbol: &str, direction: Direction) -> TradeRecord {
    TradeRecord {
        symbol: symbol.to_string(),
        direction,
        pnl: None,
        fee_amount: None,
        open_fee_amount: None,
        close_fee_amount: None,
        total_quantity: None,
        quantity_usd: None,
        open_time: parse("2024-01-15T08:00:00Z"),
        close_time: None,
        reason: Vec::new(),
        rules_followed: Vec::new(),
        learnings: None,
        entries: Vec::new(),
        exits: Vec::new(),
        stop_losses: Vec::new(),
        take_profits: Vec::new(),
    }
}

/// A closed long trade with the given pnl and RFC 3339 close time.
pub fn closed_trade(symbol: &str, pnl: f64, close_time: &str) -> TradeRecord {
    let close = parse(close_time);
    let mut t = base_trade(symbol, Direction::Long);
    t.pnl = Some(pnl);
    t.open_time = close - Duration::hours(1);
    t.close_time = Some(close);
    t
}

/// A closed short trade.
pub fn short_trade(symbol: &str, pnl: f64, close_time: &str) -> TradeRecord {
    let mut t = closed_trade(symbol, pnl, close_time);
    t.direction = Direction::Short;
    t
}

/// A still-running trade (no close time).
pub fn open_trade(symbol: &str) -> TradeRecord {
    base_trade(symbol, Direction::Long)
}

/// A closed trade carrying rationale tags.
pub fn tagged_trade(pnl: f64, tags: &[&str], close_time: &str) -> TradeRecord {
    let mut t = closed_trade("BTC-USD", pnl, close_time);
    t.reason = tags.iter().map(|s| s.to_string()).collect();
    t
}

/// Closed trades with the given pnls, one hour apart in close time, in
/// chronological order.
pub fn trades_with_pnls(pnls: &[f64]) -> Vec<TradeRecord> {
    let base = parse("2024-01-15T06:00:00Z");
    pnls.iter()
        .enumerate()
        .map(|(i, &pnl)| {
            let close = base + Duration::hours(i as i64);
            let mut t = base_trade("BTC-USD", Direction::Long);
            t.pnl = Some(pnl);
            t.open_time = close - Duration::minutes(30);
            t.close_time = Some(close);
            t
        })
        .collect()
}

pub fn price_level(price: f64, allocation: f64) -> PriceLevel {
    PriceLevel {
        mode: PriceMode::Price,
        price: Some(price),
        percent: None,
        allocation: Some(allocation),
    }
}

pub fn percent_level(percent: f64, allocation: f64) -> PriceLevel {
    PriceLevel {
        mode: PriceMode::Percent,
        price: None,
        percent: Some(percent),
        allocation: Some(allocation),
    }
}
