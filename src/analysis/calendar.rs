use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analysis::GroupAccumulator;
use crate::models::TradeRecord;
use crate::stats::closed_by_close_time;

/// One cell of the journal calendar: everything closed on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub pnl: f64,
    pub total_trades: usize,
    pub win_trades: usize,
    pub lose_trades: usize,
}

/// Group closed trades by calendar close date in `tz`, ascending.
pub fn calendar_days(trades: &[TradeRecord], tz: &Tz) -> Vec<CalendarDay> {
    let mut days: BTreeMap<NaiveDate, GroupAccumulator> = BTreeMap::new();

    for trade in closed_by_close_time(trades) {
        let Some(close_time) = trade.close_time else {
            continue;
        };
        let date = close_time.with_timezone(tz).date_naive();
        days.entry(date).or_default().add(trade);
    }

    days.into_iter()
        .map(|(date, acc)| CalendarDay {
            date,
            pnl: acc.pnl,
            total_trades: acc.total,
            win_trades: acc.wins,
            lose_trades: acc.losses,
        })
        .collect()
}
