//! Deadline Utilities
//!
//! Calendar-date parsing and deadline classification. Time of day is
//! dropped everywhere: only year/month/day take part in comparisons.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

use crate::models::DeadlineStatus;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a user or stored date string into a calendar date.
///
/// Accepts `YYYY-MM-DD`, local date-times like `YYYY-MM-DDTHH:MM[:SS]`,
/// and RFC 3339. Blank or unrecognized input yields `None`.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(date);
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Format a deadline the way it is stored and shown
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's calendar date in the user's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Classify a deadline relative to a reference date
pub fn classify(deadline: Option<NaiveDate>, reference: NaiveDate) -> DeadlineStatus {
    match deadline {
        None => DeadlineStatus::None,
        Some(d) if d < reference => DeadlineStatus::Overdue,
        Some(d) if d == reference => DeadlineStatus::DueToday,
        Some(_) => DeadlineStatus::Upcoming,
    }
}

// ========================
// Serde helpers for `Option<NaiveDate>`
// ========================

pub(crate) fn serialize_opt<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&format_date(*d)),
        None => serializer.serialize_none(),
    }
}

/// Lenient: a deadline string that is not a date loads as no deadline
pub(crate) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(stored_date))
}

/// Parse a stored deadline, warning when a non-empty value is dropped
fn stored_date(raw: &str) -> Option<NaiveDate> {
    let date = parse_date(raw);
    if date.is_none() && !raw.trim().is_empty() {
        log::warn!("[STORE] Dropping unreadable deadline {:?}", raw);
    }
    date
}
