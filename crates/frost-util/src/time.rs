//! Date formatting and comparison.
//!
//! Patterns are `chrono` strftime patterns. Dates given as strings are
//! parsed with [`DEFAULT_DATE_PATTERN`].

use std::fmt::{Display, Write};

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::error::DateError;

/// Pattern used for plain dates, e.g. `2026-10-19`.
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d";

/// Pattern used for full timestamps, e.g. `Mon Oct 19 14:03:22 +00:00 2026`.
pub const TIMESTAMP_PATTERN: &str = "%a %b %d %H:%M:%S %Z %Y";

pub fn today() -> DateTime<Local> {
    Local::now()
}

/// The current local time as a full timestamp.
pub fn today_as_string() -> String {
    today().format(TIMESTAMP_PATTERN).to_string()
}

pub fn today_as_string_with(pattern: &str) -> Result<String, DateError> {
    format_date_with(pattern, &today())
}

/// Format with [`DEFAULT_DATE_PATTERN`].
pub fn format_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format(DEFAULT_DATE_PATTERN).to_string()
}

/// Format with a caller-supplied pattern; an invalid pattern is an error
/// rather than a panic.
pub fn format_date_with<Tz>(pattern: &str, date: &DateTime<Tz>) -> Result<String, DateError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).map_err(|_| DateError::InvalidPattern {
        pattern: pattern.to_string(),
    })?;
    Ok(out)
}

pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), DEFAULT_DATE_PATTERN).map_err(|source| {
        DateError::Parse {
            input: input.to_string(),
            source,
        }
    })
}

/// Whether `target` falls strictly before `compared_to`. Equal dates are
/// not before each other.
pub fn is_before_date(target: &str, compared_to: &str) -> Result<bool, DateError> {
    Ok(parse_date(target)? < parse_date(compared_to)?)
}

/// Whether `target` falls strictly after `compared_to`.
pub fn is_after_date(target: &str, compared_to: &str) -> Result<bool, DateError> {
    Ok(parse_date(target)? > parse_date(compared_to)?)
}

pub fn is_before(target: NaiveDate, compared_to: NaiveDate) -> bool {
    target < compared_to
}

pub fn is_after(target: NaiveDate, compared_to: NaiveDate) -> bool {
    target > compared_to
}
