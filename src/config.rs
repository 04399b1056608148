use chrono_tz::Tz;

/// Runtime configuration for the report binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the journal export (JSON array of trades).
    pub journal_path: String,

    /// Timezone used for day boundaries and time-of-day buckets.
    pub timezone: Tz,

    /// The tickers table always renders at least this many rows.
    pub min_ticker_rows: usize,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            journal_path: env("JOURNAL_PATH", "journal.json"),
            timezone: env("JOURNAL_TIMEZONE", "UTC")
                .parse()
                .unwrap_or(chrono_tz::UTC),
            min_ticker_rows: env("MIN_TICKER_ROWS", "5").parse().unwrap_or(5),
            log_level: env("LOG_LEVEL", "info"),
        }
    }
}
