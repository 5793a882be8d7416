//! Serde adapters for TMDB JSON conventions.
//!
//! TMDB encodes dates as `YYYY-MM-DD` strings and uses `""` or `null`
//! interchangeably for "unknown". Arrays are sometimes `null` instead of
//! empty. The functions here are wired in with `deserialize_with`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Date format used by TMDB (`release_date`, `air_date`, `birthday`, ...).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format used in authentication responses (`expires_at`).
const AUTH_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a TMDB date string. Empty strings yield `None`.
///
/// # Errors
///
/// Returns an error if the string is non-empty and not `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map(Some)
}

/// `YYYY-MM-DD`, `""` or `null` into `Option<NaiveDate>`.
pub(crate) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_date(&s).map_err(|e| D::Error::custom(format!("invalid date {s:?}: {e}"))),
    }
}

/// `YYYY-MM-DD HH:MM:SS UTC` into `DateTime<Utc>`.
pub(crate) fn auth_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let naive = raw.trim().trim_end_matches("UTC").trim_end();
    NaiveDateTime::parse_from_str(naive, AUTH_TIMESTAMP_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|e| D::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
}

/// RFC 3339 timestamp, `""` or `null` into `Option<DateTime<Utc>>`.
pub(crate) fn optional_rfc3339<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| D::Error::custom(format!("invalid timestamp {s:?}: {e}"))),
    }
}

/// `""` or `null` into `None`.
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// `null` into an empty `Vec`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}
