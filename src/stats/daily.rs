use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Direction, TradeRecord};

/// One point of the dashboard pnl chart: summed pnl of all trades closed on
/// a calendar date in the configured timezone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPnl {
    pub date: NaiveDate,
    pub pnl: f64,
}

/// One bar of the volume chart, split long vs short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyVolume {
    pub date: NaiveDate,
    pub long_volume: f64,
    pub short_volume: f64,
}

/// Group closed trades by calendar close date and sum pnl and per-direction
/// volume. The BTreeMap key keeps both series ascending by actual date, not
/// string order.
pub fn daily_series(closed: &[&TradeRecord], tz: &Tz) -> (Vec<DailyPnl>, Vec<DailyVolume>) {
    let mut days: BTreeMap<NaiveDate, (f64, f64, f64)> = BTreeMap::new();

    for trade in closed {
        let Some(close_time) = trade.close_time else {
            continue;
        };
        let date = close_time.with_timezone(tz).date_naive();
        let day = days.entry(date).or_insert((0.0, 0.0, 0.0));

        day.0 += trade.pnl_or_zero();
        match trade.direction {
            Direction::Long => day.1 += trade.quantity_or_zero(),
            Direction::Short => day.2 += trade.quantity_or_zero(),
        }
    }

    let pnl_series = days
        .iter()
        .map(|(&date, &(pnl, _, _))| DailyPnl { date, pnl })
        .collect();
    let volume_series = days
        .iter()
        .map(|(&date, &(_, long_volume, short_volume))| DailyVolume {
            date,
            long_volume,
            short_volume,
        })
        .collect();

    (pnl_series, volume_series)
}
