//! Parsing helpers for request input.

use chrono::{DateTime, NaiveDate};

use crate::server::error::AppError;

/// Returns the value of a required request field.
///
/// Missing values and values made only of whitespace are both rejected.
///
/// # Arguments
/// - `value` - Raw optional field from the request
/// - `message` - Client-facing message used when the field is missing
///
/// # Returns
/// - `Ok(String)` - The field value
/// - `Err(AppError::BadRequest)` - The field is missing or blank
pub fn require(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// Parses a loosely formatted calendar date.
///
/// Accepts `2024-3-5`, `2024-03-05`, `2024/3/5`, `2024.3.5`, `20240305` and
/// timestamps such as `2024-03-05T09:00:00+09:00` or `2024-03-05 09:00:00`,
/// in which case the date part in the timestamp's own offset is kept.
///
/// # Returns
/// - `Some(NaiveDate)` - Parsed date
/// - `None` - Input is not a recognizable date
pub fn parse_loose_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.date_naive());
    }

    // Drop any time-of-day suffix
    let date_part = input
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(input);

    if date_part.len() == 8 && date_part.bytes().all(|b| b.is_ascii_digit()) {
        return parse_compact_date(date_part);
    }

    let mut parts = date_part.split(['-', '/', '.']);
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a `YYYYMMDD` date as used by the NEIS API.
pub fn parse_compact_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y%m%d").ok()
}

/// Formats a date as `YYYYMMDD`.
pub fn format_compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
