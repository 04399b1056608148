use chrono::Timelike;
use chrono_tz::Tz;

use crate::models::{TimeOfDay, TradeRecord};

/// Accumulated pnl per six-hour close-time bucket, in the given timezone.
/// Returns `(best, worst)`: best is the top bucket only when its pnl is
/// positive, worst the bottom bucket only when its pnl is negative, so an
/// all-flat day reports neither. Ties resolve to the earliest bucket.
pub fn best_and_worst(closed: &[&TradeRecord], tz: &Tz) -> (Option<TimeOfDay>, Option<TimeOfDay>) {
    if closed.is_empty() {
        return (None, None);
    }

    let mut bucket_pnl = [0.0f64; 4];
    for trade in closed {
        let Some(close_time) = trade.close_time else {
            continue;
        };
        let hour = close_time.with_timezone(tz).hour();
        bucket_pnl[TimeOfDay::from_hour(hour) as usize] += trade.pnl_or_zero();
    }

    let mut best = TimeOfDay::Night;
    let mut worst = TimeOfDay::Night;
    for slot in TimeOfDay::ALL {
        if bucket_pnl[slot as usize] > bucket_pnl[best as usize] {
            best = slot;
        }
        if bucket_pnl[slot as usize] < bucket_pnl[worst as usize] {
            worst = slot;
        }
    }

    let best = (bucket_pnl[best as usize] > 0.0).then_some(best);
    let worst = (bucket_pnl[worst as usize] < 0.0).then_some(worst);
    (best, worst)
}
