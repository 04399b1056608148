use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::direction::{Direction, Outcome, PriceMode};

/// One entry/exit/SL/TP leg. `allocation` is the percentage of position size
/// (0-100) assigned to the leg; the journal front-end enforces that
/// allocations within a group sum to at most 100, so this type does not
/// re-validate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceLevel {
    pub mode: PriceMode,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub percent: Option<f64>,
    #[serde(default)]
    pub allocation: Option<f64>,
}

impl PriceLevel {
    /// Resolve the leg to an absolute price. Percent-mode legs are recorded
    /// as a percentage of `reference` (the weighted entry average).
    pub fn effective_price(&self, reference: f64) -> Option<f64> {
        match self.mode {
            PriceMode::Price => finite(self.price),
            PriceMode::Percent => finite(self.percent).map(|p| reference * p / 100.0),
        }
    }
}

/// A single journaled trade, as stored by the web app (camelCase document
/// fields). Unknown document fields are ignored on deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub symbol: String,
    pub direction: Direction,

    /// Realized profit/loss in account currency; absent until close.
    #[serde(default)]
    pub pnl: Option<f64>,

    #[serde(default)]
    pub fee_amount: Option<f64>,
    #[serde(default)]
    pub open_fee_amount: Option<f64>,
    #[serde(default)]
    pub close_fee_amount: Option<f64>,

    #[serde(default)]
    pub total_quantity: Option<f64>,
    #[serde(default, rename = "quantityUSD")]
    pub quantity_usd: Option<f64>,

    pub open_time: DateTime<Utc>,
    /// Present iff the trade is closed.
    #[serde(default)]
    pub close_time: Option<DateTime<Utc>>,

    /// Rationale tags. A trade may carry any number of tags and contributes
    /// fully to each one's bucket in tag analysis.
    #[serde(default)]
    pub reason: Vec<String>,

    // Journal annotations, passed through untouched by the aggregator.
    #[serde(default)]
    pub rules_followed: Vec<String>,
    #[serde(default)]
    pub learnings: Option<String>,

    #[serde(default)]
    pub entries: Vec<PriceLevel>,
    #[serde(default)]
    pub exits: Vec<PriceLevel>,
    #[serde(default)]
    pub stop_losses: Vec<PriceLevel>,
    #[serde(default)]
    pub take_profits: Vec<PriceLevel>,
}

impl TradeRecord {
    pub fn is_closed(&self) -> bool {
        self.close_time.is_some()
    }

    /// Missing or non-finite pnl reads as 0. This coercion is the contract
    /// for every numeric field: dashboards display these values directly, so
    /// NaN must never escape the aggregator.
    pub fn pnl_or_zero(&self) -> f64 {
        finite(self.pnl).unwrap_or(0.0)
    }

    pub fn fee_or_zero(&self) -> f64 {
        finite(self.fee_amount).unwrap_or(0.0)
    }

    pub fn open_fee_or_zero(&self) -> f64 {
        finite(self.open_fee_amount).unwrap_or(0.0)
    }

    pub fn close_fee_or_zero(&self) -> f64 {
        finite(self.close_fee_amount).unwrap_or(0.0)
    }

    pub fn quantity_or_zero(&self) -> f64 {
        finite(self.total_quantity).unwrap_or(0.0)
    }

    pub fn quantity_usd_or_zero(&self) -> f64 {
        finite(self.quantity_usd).unwrap_or(0.0)
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_pnl(self.pnl_or_zero())
    }

    /// Weighted entry price over partial entry legs. Entries are recorded as
    /// absolute prices, so no reference is needed.
    pub fn average_entry_price(&self) -> f64 {
        weighted_average_price(&self.entries, 0.0)
    }

    pub fn average_exit_price(&self) -> f64 {
        weighted_average_price(&self.exits, 0.0)
    }

    /// Weighted stop-loss price, percent legs resolved against the entry
    /// average.
    pub fn stop_loss_price(&self) -> f64 {
        weighted_average_price(&self.stop_losses, self.average_entry_price())
    }

    pub fn take_profit_price(&self) -> f64 {
        weighted_average_price(&self.take_profits, self.average_entry_price())
    }
}

/// Allocation-weighted average price over a group of legs:
/// sum(price * allocation) / sum(allocation). Legs without a resolvable
/// price or allocation are skipped; an empty group yields 0.
pub fn weighted_average_price(levels: &[PriceLevel], reference: f64) -> f64 {
    let mut weighted_sum = 0.0;
    let mut allocation_sum = 0.0;

    for level in levels {
        let (Some(price), Some(allocation)) =
            (level.effective_price(reference), finite(level.allocation))
        else {
            continue;
        };
        weighted_sum += price * allocation;
        allocation_sum += allocation;
    }

    if allocation_sum > 0.0 {
        weighted_sum / allocation_sum
    } else {
        0.0
    }
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}
