//! Recency window for feed entries.
//!
//! The cutoff is `now - lookback` in UTC and is inclusive: an entry published
//! exactly at the cutoff is kept.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

/// Default width of the recency window.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 7;

/// Keeps entries published at or after a fixed cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyFilter {
    cutoff: DateTime<Utc>,
}

impl RecencyFilter {
    /// Window of width `lookback` ending at `now`.
    ///
    /// A window reaching past the earliest representable instant keeps
    /// everything.
    pub fn new(now: DateTime<Utc>, lookback: Duration) -> Self {
        Self {
            cutoff: now
                .checked_sub_signed(lookback)
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    pub fn keep(&self, published: DateTime<Utc>) -> bool {
        published >= self.cutoff
    }
}

/// Parse a feed timestamp into UTC.
///
/// Accepts RFC 3339 / ISO 8601 (with or without offset; no offset means
/// UTC), RFC 2822, and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
