use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use journal_stats::analysis::{direction_breakdown, TickerAnalyzer};
use journal_stats::config::Config;
use journal_stats::journal::load_journal;
use journal_stats::report;
use journal_stats::stats::StatsAggregator;

fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // JOURNAL_PATH from the environment, or the first CLI argument.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| cfg.journal_path.clone());

    let trades = load_journal(&path).with_context(|| format!("loading journal {path}"))?;
    info!(trades = trades.len(), timezone = %cfg.timezone, "computing statistics");

    let stats = StatsAggregator::new(cfg.timezone).compute(&trades);
    report::print_summary(&stats);

    let tickers = TickerAnalyzer::new(cfg.min_ticker_rows).analyze(&trades);
    report::print_tickers(&tickers);
    report::print_direction(&direction_breakdown(&trades));

    Ok(())
}
