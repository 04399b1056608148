use serde::{Deserialize, Serialize};

use crate::models::{Outcome, Sentiment, TradeRecord};
use crate::stats::streak::tail_window;

const BASELINE: i32 = 50;
const STEP: i32 = 5;

/// Greed/fear index shown on the dashboard gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedFear {
    pub value: u32,
    pub label: Sentiment,
}

impl Default for GreedFear {
    fn default() -> Self {
        Self {
            value: BASELINE as u32,
            label: Sentiment::Neutral,
        }
    }
}

/// Start at 50 and move ±5 per win/loss over the same tail window the streak
/// uses, clamping the running value to [0, 100]. Break-even trades leave the
/// index unchanged.
pub fn greed_fear(closed: &[&TradeRecord]) -> GreedFear {
    let mut value = BASELINE;

    for trade in tail_window(closed) {
        match trade.outcome() {
            Outcome::Win => value += STEP,
            Outcome::Loss => value -= STEP,
            Outcome::BreakEven => {}
        }
        value = value.clamp(0, 100);
    }

    let label = match value.cmp(&BASELINE) {
        std::cmp::Ordering::Less => Sentiment::Fear,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
        std::cmp::Ordering::Greater => Sentiment::Greed,
    };

    GreedFear {
        value: value as u32,
        label,
    }
}
