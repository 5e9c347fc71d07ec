//! Jalali date rendering.

use chrono::{DateTime, Datelike, Local, NaiveDate};

use crate::calendar::jalali::{gregorian_to_jalali, JalaliDate};
use crate::locale::digits::to_persian_digits;

/// Convert a chrono date.
pub fn jalali_of(date: NaiveDate) -> JalaliDate {
    gregorian_to_jalali(date.year() as i64, date.month(), date.day())
}

/// Today's date in the local time zone, as Jalali.
pub fn today_jalali() -> JalaliDate {
    jalali_of(Local::now().date_naive())
}

/// Render as `YYYY/MM/DD` in Persian digits.
pub fn format_jalali(date: JalaliDate) -> String {
    to_persian_digits(&date.to_string())
}

/// Parse an ISO date (`YYYY-MM-DD`) or RFC 3339 timestamp.
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()))
}

/// Render a stored ISO date. Empty or unparseable input renders as "",
/// and so do dates before the Jalali era.
pub fn format_jalali_str(input: &str) -> String {
    match parse_iso_date(input).map(jalali_of) {
        Some(date) if date.is_calendar_date() => format_jalali(date),
        Some(date) => {
            tracing::debug!(input, jalali = %date, "Date before the Jalali era");
            String::new()
        }
        None => {
            if !input.is_empty() {
                tracing::debug!(input, "Unparseable date");
            }
            String::new()
        }
    }
}
