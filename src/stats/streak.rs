use crate::models::TradeRecord;
use crate::stats::TAIL_WINDOW;

/// Current run at the tail of the last `TAIL_WINDOW` closed trades, as the
/// dashboard string `"<count> <win|loss|break-even>"`. Walks the window
/// backward from the most recent trade and counts consecutive trades with
/// the same outcome, stopping at the first mismatch. `"0"` when there are
/// no closed trades.
pub fn current_streak(closed: &[&TradeRecord]) -> String {
    let window = tail_window(closed);

    let Some(last) = window.last() else {
        return "0".to_string();
    };

    let kind = last.outcome();
    let count = window
        .iter()
        .rev()
        .take_while(|t| t.outcome() == kind)
        .count();

    format!("{} {}", count, kind)
}

pub(crate) fn tail_window<'a>(closed: &'a [&'a TradeRecord]) -> &'a [&'a TradeRecord] {
    let start = closed.len().saturating_sub(TAIL_WINDOW);
    &closed[start..]
}
