//! Serde helpers for calendar dates.
//!
//! The API is not consistent about `startDate`: some documents carry a plain
//! `YYYY-MM-DD` date while others carry a full RFC 3339 timestamp. Both are
//! accepted; the date is always written back in the plain form.

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// Parses a start date from either a civil date or an RFC 3339 timestamp.
///
/// Timestamps keep their calendar date in UTC.
///
/// # Examples
///
/// ```rust
/// use learnify_core::models::date::parse_start_date;
///
/// let plain = parse_start_date("2024-03-01").unwrap();
/// let stamped = parse_start_date("2024-03-01T00:00:00.000Z").unwrap();
/// assert_eq!(plain, stamped);
/// ```
pub fn parse_start_date(raw: &str) -> Result<Date, String> {
    let raw = raw.trim();
    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(TimeZone::UTC).date());
    }
    raw.parse::<Date>()
        .map_err(|e| format!("Invalid start date '{raw}': {e}"))
}

/// `#[serde(with = "...")]` module for `startDate` fields.
pub mod start_date {
    use jiff::civil::Date;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(date)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_start_date(&raw).map_err(D::Error::custom)
    }
}
