//! ISO-8601 time codec (internet date-time profile).
//!
//! Sources disagree on whether sub-second precision is present. RFC 3339 makes `time-secfrac`
//! optional, so a single RFC 3339 parse accepts both shapes. Formatting always emits millisecond
//! fractional seconds with a `Z` designator.

use chrono::{DateTime, SecondsFormat, Utc};

/// Parses an ISO-8601 timestamp, with or without fractional seconds. Any zone offset is
/// normalized to UTC. Returns `None` for empty input, a missing `T` separator, or anything
/// RFC 3339 rejects.
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    // RFC 3339 also allows a space between date and time; the internet profile does not.
    if !matches!(value.as_bytes().get(10), Some(&(b'T' | b't'))) {
        return None;
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Formats as ISO-8601 with millisecond fractional seconds, e.g. `2024-03-01T09:30:00.250Z`.
pub fn format(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter that (de)serializes a `DateTime<Utc>` through [`format`] and [`parse`].
///
/// Use with `#[serde(with = "imsg_core::iso8601::serde_millis")]`.
pub mod serde_millis {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid ISO8601 date: {}", raw)))
    }
}
