//! Date formatting for post bylines.

use chrono::{DateTime, NaiveDate};

/// Format an ISO-8601 timestamp as a long en-US date ("January 5, 2024").
///
/// The calendar date is taken as written in the timestamp, without
/// converting to another timezone. Accepts full RFC 3339 date-times and bare
/// `YYYY-MM-DD` dates; returns `None` for anything else.
pub fn long_date(iso: &str) -> Option<String> {
    let date = match DateTime::parse_from_rfc3339(iso.trim()) {
        Ok(datetime) => datetime.date_naive(),
        Err(_) => NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d").ok()?,
    };
    Some(date.format("%B %-d, %Y").to_string())
}
