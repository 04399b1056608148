use crate::analysis::{DirectionBreakdown, TickerStats};
use crate::stats::StatsResult;

/// Print the dashboard statistics as an aligned terminal report.
pub fn print_summary(stats: &StatsResult) {
    println!("\n{}", "=".repeat(70));
    println!("  TRADING JOURNAL REPORT");
    println!("{}", "=".repeat(70));
    println!();
    println!("  PERFORMANCE");
    println!("  ───────────────────────────────────");
    println!("  Net PnL:     {:+.2}", stats.net_pnl);
    println!("  Max Profit:  {:+.2}", stats.max_profit);
    println!("  Max Loss:    {:+.2}", stats.max_loss);
    println!("  Fees:        {:.2}", stats.total_fees);
    println!("  Volume:      {:.2}", stats.total_volume);
    println!();
    println!("  TRADES");
    println!("  ───────────────────────────────────");
    println!("  Total:       {}", stats.total_trades);
    println!("  Win/Loss:    {} / {}", stats.win_trades, stats.lose_trades);
    println!("  Win Ratio:   {:.2}%", stats.win_ratio);
    println!("  Avg PnL:     {:+.2}", stats.average_pnl);
    println!("  Symbols:     {}", stats.total_symbols);
    println!("  Streak:      {}", stats.streak);
    println!();
    println!("  TIMING");
    println!("  ───────────────────────────────────");
    println!("  Best Time:   {}", stats.best_time);
    println!("  Worst Time:  {}", stats.worst_time);
    println!(
        "  Sentiment:   {} ({})",
        stats.greed_fear.value, stats.greed_fear.label
    );

    if !stats.daily_data.is_empty() {
        println!();
        println!("  BY DAY");
        println!("  ───────────────────────────────────");
        for day in &stats.daily_data {
            println!("  {}: {:+.2}", day.date, day.pnl);
        }
    }

    if !stats.tag_analysis.is_empty() {
        println!();
        println!("  BY TAG");
        println!("  ───────────────────────────────────");
        for tag in &stats.tag_analysis {
            println!(
                "  {:>16}: {} trades | WR {:.0}% | PnL {:+.2} | Avg {:+.2}",
                tag.tag, tag.total_trades, tag.win_rate, tag.total_pnl, tag.avg_pnl
            );
        }
    }

    println!("{}", "=".repeat(70));
}

/// Print the per-symbol table (padding rows render as a dash).
pub fn print_tickers(rows: &[TickerStats]) {
    println!();
    println!("  BY TICKER");
    println!("  ───────────────────────────────────");
    for row in rows {
        let symbol = if row.symbol.is_empty() { "-" } else { &row.symbol };
        println!(
            "  {:>12}: {} trades | WR {:.0}% | PnL {:+.2} | Vol {:.2}",
            symbol, row.total_trades, row.win_rate, row.total_pnl, row.total_volume
        );
    }
}

/// Print the long/short split.
pub fn print_direction(breakdown: &DirectionBreakdown) {
    println!();
    println!("  BY DIRECTION");
    println!("  ───────────────────────────────────");
    println!(
        "  {:>12}: {} trades | WR {:.0}% | PnL {:+.2}",
        "long",
        breakdown.long.total_trades,
        breakdown.long.win_rate,
        breakdown.long.total_pnl
    );
    println!(
        "  {:>12}: {} trades | WR {:.0}% | PnL {:+.2}",
        "short",
        breakdown.short.total_trades,
        breakdown.short.win_rate,
        breakdown.short.total_pnl
    );
}
