use std::path::Path;

use tracing::debug;

use crate::models::TradeRecord;

/// Errors from reading a journal export. This loader is the only fallible
/// surface of the crate; once records are parsed the aggregation itself is
/// total. A document with a malformed timestamp is rejected here rather than
/// reaching the aggregator.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("failed to read journal file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse journal file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a journal export: a JSON array of trade documents as stored by the
/// web app. Unknown document fields are ignored.
pub fn load_journal(path: impl AsRef<Path>) -> Result<Vec<TradeRecord>, JournalError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| JournalError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let trades: Vec<TradeRecord> =
        serde_json::from_str(&raw).map_err(|source| JournalError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    debug!(count = trades.len(), path = %path.display(), "journal loaded");
    Ok(trades)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_an_export_with_extra_fields() {
        let file = write_temp(
            r#"[
                {
                    "symbol": "BTC-USD",
                    "direction": "long",
                    "pnl": 25.0,
                    "openTime": "2024-01-15T09:00:00Z",
                    "closeTime": "2024-01-15T11:00:00Z",
                    "reason": ["breakout"],
                    "userId": "ignored"
                },
                {
                    "symbol": "ETH-USD",
                    "direction": "short",
                    "openTime": "2024-01-16T09:00:00Z"
                }
            ]"#,
        );

        let trades = load_journal(file.path()).unwrap();
        assert_eq!(trades.len(), 2);
        assert!(trades[0].is_closed());
        assert!(!trades[1].is_closed());
    }

    #[test]
    fn malformed_timestamp_is_a_parse_error() {
        let file = write_temp(
            r#"[{
                "symbol": "BTC-USD",
                "direction": "long",
                "openTime": "not-a-date"
            }]"#,
        );

        let err = load_journal(file.path()).unwrap_err();
        assert!(matches!(err, JournalError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_journal("/nonexistent/journal.json").unwrap_err();
        assert!(matches!(err, JournalError::Io { .. }));
    }
}
