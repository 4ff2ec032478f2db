//! Clock times and calendar dates as they appear in attendance input.
//!
//! - Clock times are `H:MM` or `HH:MM` on a 24-hour clock.
//! - Form dates are `DD-MM-YYYY`.
//! - Stored records are matched to a calendar day by a `DD-MM-YY` key.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::Serializer;

use super::formatter::split_hh_mm;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

pub const FORM_DATE_FORMAT: &str = "%d-%m-%Y";
pub const DAY_KEY_FORMAT: &str = "%d-%m-%y";
pub const CLOCK_FORMAT: &str = "%H:%M";

/// Parses an `H:MM`/`HH:MM` clock time.
///
/// Hours above 23 or minutes above 59 are rejected.
pub fn parse_clock(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    let (hours, _) = text.split_once(':')?;
    if hours.len() > 2 {
        return None;
    }
    let (hours, minutes) = split_hh_mm(text)?;
    NaiveTime::from_hms_opt(u32::try_from(hours).ok()?, u32::try_from(minutes).ok()?, 0)
}

pub fn format_clock(time: &NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

pub fn minutes_of_day(time: &NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Time between check-in and check-out.
///
/// A check-out earlier than the check-in is an overnight shift and wraps
/// past midnight.
pub fn elapsed(in_time: &NaiveTime, out_time: &NaiveTime) -> Duration {
    let mut minutes = minutes_of_day(out_time) - minutes_of_day(in_time);
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }
    Duration::minutes(minutes)
}

/// Parses a `DD-MM-YYYY` form date.
///
/// The text must be exactly two digits, two digits and four digits separated
/// by dashes and name a real calendar day.
pub fn parse_form_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[2] == b'-'
        && bytes[5] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(text, FORM_DATE_FORMAT).ok()
}

pub fn format_form_date(date: &NaiveDate) -> String {
    date.format(FORM_DATE_FORMAT).to_string()
}

/// `DD-MM-YY` key used to match stored records against a calendar day.
pub fn day_key(date: &NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

pub fn is_sunday(date: &NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

pub fn month_start(date: &NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(*date)
}

pub fn days_in_month(date: &NaiveDate) -> u32 {
    let start = month_start(date);
    let next = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    };
    match next {
        Some(next) => (next - start).num_days() as u32,
        None => 31,
    }
}

pub fn serialize_form_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_form_date(date))
}

pub fn serialize_optional_clock<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
    match time {
        Some(time) => serializer.serialize_str(&format_clock(time)),
        None => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_handles_leap_years() {
        let feb_2024 = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let feb_2025 = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        let dec_2025 = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(days_in_month(&feb_2024), 29);
        assert_eq!(days_in_month(&feb_2025), 28);
        assert_eq!(days_in_month(&dec_2025), 31);
    }

    #[test]
    fn test_parse_clock_rejects_three_digit_hours() {
        assert_eq!(parse_clock("100:00"), None);
        assert_eq!(parse_clock("9:05"), NaiveTime::from_hms_opt(9, 5, 0));
    }
}
