//! Domain primitives: ExecutedAt, Asset.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output layout of Cryptact timestamps.
pub const CRYPTACT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized timestamp: {0:?}")]
pub struct TimestampParseError(pub String);

/// Execution time of a ledger entry, kept as the wall-clock time it was recorded in.
///
/// Offsets in the input are honoured only to pick the wall-clock reading; Unix
/// seconds are read as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExecutedAt(pub NaiveDateTime);

impl ExecutedAt {
    pub fn new(at: NaiveDateTime) -> Self {
        ExecutedAt(at)
    }

    pub fn parse(s: &str) -> Result<Self, TimestampParseError> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(ExecutedAt(dt.naive_local()));
        }
        for fmt in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
                return Ok(ExecutedAt(dt.naive_local()));
            }
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(ExecutedAt(dt));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return Ok(ExecutedAt(dt));
            }
        }
        if let Ok(secs) = s.parse::<i64>() {
            if let Some(dt) = DateTime::<Utc>::from_timestamp(secs, 0) {
                return Ok(ExecutedAt(dt.naive_utc()));
            }
        }

        Err(TimestampParseError(s.to_string()))
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Render as `YYYY/MM/DD HH:MM:SS`.
    pub fn to_cryptact_string(&self) -> String {
        self.0.format(CRYPTACT_TIMESTAMP_FORMAT).to_string()
    }
}

impl std::fmt::Display for ExecutedAt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_cryptact_string())
    }
}

/// Asset symbol in Cryptact form (e.g., "BTC", "JPY").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Asset(pub String);

impl Asset {
    /// Create an Asset from an already-normalized symbol.
    pub fn new(symbol: String) -> Self {
        Asset(symbol)
    }

    /// Japanese yen, the default pricing and fee currency.
    pub fn jpy() -> Self {
        Asset("JPY".to_string())
    }

    /// Normalize a Caaj `uti`: percent-decode, then uppercase.
    ///
    /// Malformed escapes are kept literally and invalid UTF-8 is replaced.
    pub fn from_uti(uti: &str) -> Self {
        Asset(Self::normalize(uti))
    }

    pub fn normalize(uti: &str) -> String {
        percent_decode_str(uti).decode_utf8_lossy().to_uppercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
