//! `lastmod` values: accepted inputs, permissive parsing and W3C datetime output.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use std::fmt::Display;

use crate::error::{Result, SitemapError};

/// Database-style layouts with a trailing offset (`+00`, `+0530`, `+05:30`).
/// `%.f` also matches when there is no fraction.
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
];

/// Layouts without an offset, tried last; interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Last modification time of a URL, as supplied by the content source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawLastModified")]
pub enum LastModified {
    At(DateTime<FixedOffset>),
    /// Unix timestamp in seconds.
    Timestamp(i64),
    /// Parsed lazily at serialization time.
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLastModified {
    Timestamp(i64),
    Text(String),
}

impl From<RawLastModified> for LastModified {
    fn from(raw: RawLastModified) -> Self {
        match raw {
            RawLastModified::Timestamp(secs) => LastModified::Timestamp(secs),
            RawLastModified::Text(s) => LastModified::Text(s),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for LastModified {
    fn from(dt: DateTime<Tz>) -> Self {
        LastModified::At(dt.fixed_offset())
    }
}

impl From<i64> for LastModified {
    fn from(secs: i64) -> Self {
        LastModified::Timestamp(secs)
    }
}

impl From<&str> for LastModified {
    fn from(s: &str) -> Self {
        LastModified::Text(s.to_string())
    }
}

impl From<String> for LastModified {
    fn from(s: String) -> Self {
        LastModified::Text(s)
    }
}

impl LastModified {
    /// Coerces to an instant. Fails with `SitemapError::Parse` for unparseable text
    /// or an out-of-range timestamp.
    pub fn resolve(&self) -> Result<DateTime<FixedOffset>> {
        match self {
            LastModified::At(dt) => Ok(*dt),
            LastModified::Timestamp(secs) => Utc
                .timestamp_opt(*secs, 0)
                .single()
                .map(|dt| dt.fixed_offset())
                .ok_or_else(|| SitemapError::Parse {
                    value: secs.to_string(),
                    message: "timestamp out of range".to_string(),
                }),
            LastModified::Text(s) => parse_datetime(s),
        }
    }

    /// Resolved instant rendered as `YYYY-MM-DDTHH:MM:SS+HH:MM`.
    pub fn to_w3c(&self) -> Result<String> {
        self.resolve().map(|dt| format_w3c(&dt))
    }
}

/// Parses RFC 3339, RFC 2822, `YYYY-MM-DD[ T]HH:MM:SS[.fff][offset]`,
/// `YYYY-MM-DD HH:MM` or `YYYY-MM-DD`. Values without an offset are taken as UTC.
pub fn parse_datetime(raw: &str) -> Result<DateTime<FixedOffset>> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt);
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    if let Some(naive) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(naive.and_utc().fixed_offset());
    }

    Err(SitemapError::Parse {
        value: raw.to_string(),
        message: "expected RFC 3339, RFC 2822 or YYYY-MM-DD[ HH:MM[:SS[.fff]]][offset]".to_string(),
    })
}

/// W3C datetime with seconds and a numeric offset (`Z` is written as `+00:00`).
pub fn format_w3c<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}
