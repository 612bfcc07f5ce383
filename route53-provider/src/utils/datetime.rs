//! Timestamp parsing for `SubmittedAt` fields
//!
//! Route 53 reports ISO-8601 UTC timestamps, sometimes with fractional
//! seconds (`2013-07-28T01:00:01Z`, `2013-07-28T01:00:01.001Z`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parses an ISO-8601 timestamp into UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value.trim()).map(|dt| dt.with_timezone(&Utc))
}

/// Serde adapter: `#[serde(deserialize_with = "crate::utils::datetime::deserialize")]`
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(|e| Error::custom(format!("Invalid ISO-8601 timestamp: {e}")))
}
