//! Date grammar shared by command input and the stored format.
//!
//! # Responsibility
//! - Parse `<keyword> dd/mm/yyyy HHmm` from command payloads.
//! - Parse and format `dd/MM/yyyy HHmm` for the storage codec.
//!
//! # Invariants
//! - Both forms share one field grammar: `/`-separated day/month/year, then
//!   a fixed 2+2 character HHMM split. Stored dates must re-parse with the
//!   exact grammar that produced them.
//! - Impossible calendar date-times (day 31 in a 30-day month, hour >= 24)
//!   are rejected, not clamped.

use crate::parser::{ParseError, ParseResult};
use chrono::{NaiveDate, NaiveDateTime};

/// Parses the date substring of a deadline/event payload.
///
/// Expected shape: a keyword token (`by`, `at` — discarded), a
/// `day/month/year` token, and an `HHMM` token, separated by single spaces.
///
/// # Errors
/// - `ParseError::MissingDate` when the payload had no date substring.
/// - `ParseError::InvalidDate` on any shape, numeric, or calendar failure.
pub fn parse_date_payload(date: Option<&str>) -> ParseResult<NaiveDateTime> {
    let date = date.ok_or(ParseError::MissingDate)?;
    let mut tokens = date.splitn(3, ' ');
    let _keyword = tokens
        .next()
        .ok_or_else(|| invalid(date, "expected `<keyword> dd/mm/yyyy HHmm`"))?;
    let day_month_year = tokens
        .next()
        .ok_or_else(|| invalid(date, "missing dd/mm/yyyy"))?;
    let hour_minute = tokens.next().ok_or_else(|| invalid(date, "missing HHmm"))?;
    parse_fields(day_month_year, hour_minute)
}

/// Parses the `dd/MM/yyyy HHmm` date field of a stored task line.
pub fn parse_stored_date(text: &str) -> ParseResult<NaiveDateTime> {
    let (day_month_year, hour_minute) = text
        .split_once(' ')
        .ok_or_else(|| invalid(text, "expected `dd/MM/yyyy HHmm`"))?;
    parse_fields(day_month_year, hour_minute)
}

/// Formats a date-time the way the storage codec expects to re-parse it.
pub fn format_stored_date(when: &NaiveDateTime) -> String {
    when.format("%d/%m/%Y %H%M").to_string()
}

fn parse_fields(day_month_year: &str, hour_minute: &str) -> ParseResult<NaiveDateTime> {
    let mut parts = day_month_year.splitn(3, '/');
    let day = parse_number(parts.next(), day_month_year, "day")?;
    let month = parse_number(parts.next(), day_month_year, "month")?;
    let year: i32 = parse_number(parts.next(), day_month_year, "year")?;

    // Fixed 2+2 split: first two characters are the hour, next two the minute.
    let hour: u32 = parse_number(hour_minute.get(0..2), hour_minute, "hour")?;
    let minute: u32 = parse_number(hour_minute.get(2..4), hour_minute, "minute")?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| {
            invalid(
                &format!("{day_month_year} {hour_minute}"),
                "not a valid calendar date-time",
            )
        })
}

fn parse_number<T: std::str::FromStr>(
    field: Option<&str>,
    source: &str,
    what: &str,
) -> ParseResult<T> {
    field
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| invalid(source, &format!("bad {what} field")))
}

fn invalid(text: &str, reason: &str) -> ParseError {
    ParseError::InvalidDate(format!("`{text}` ({reason})"))
}
