//! Duration formatting and parsing for working-hours values.
//!
//! Working hours, allocated hours and overtime are wall-clock deltas written
//! as `HH:MM`. Internally they are `chrono::Duration` values holding whole
//! minutes; this module converts between the two.
//!
//! ## Format Specifications
//!
//! - Per-record values ([`format_duration`]): hours zero-padded to at least
//!   two digits, e.g. `08:30`, `24:05`, `100:00`.
//! - Aggregate totals ([`format_total`]): hours unpadded, e.g. `8:30`, `0:05`.
//! - Parsing ([`parse_duration`]) accepts any number of hour digits and exactly
//!   two minute digits below 60, so both renderings parse back.
//! - Negative durations render as `00:00` / `0:00`.
//!
//! ## Examples
//!
//! ```rust
//! use rollcall::libs::formatter::{format_duration, format_total, parse_duration};
//! use chrono::Duration;
//!
//! let worked = Duration::hours(8) + Duration::minutes(30);
//! assert_eq!(format_duration(&worked), "08:30");
//! assert_eq!(format_total(&worked), "8:30");
//! assert_eq!(parse_duration("8:30"), Some(worked));
//! ```

use chrono::Duration;
use serde::Serializer;

/// Formats a duration as zero-padded `HH:MM`.
///
/// Hours are never clamped to a day, so 25 hours renders as `25:00`.
/// Seconds are truncated.
///
/// ```rust
/// use rollcall::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a duration as `H:MM` with an unpadded hour component.
///
/// Used for aggregate overtime totals.
pub fn format_total(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{}:{:02}", hours.max(0), mins.max(0))
}

/// Parses `H:MM`, `HH:MM` or longer hour components into a duration.
///
/// Returns `None` when the text is not digits-colon-two-digits or the minute
/// part is 60 or more.
pub fn parse_duration(text: &str) -> Option<Duration> {
    let (hours, minutes) = split_hh_mm(text.trim())?;
    if minutes >= 60 {
        return None;
    }
    Some(Duration::minutes(hours * 60 + minutes))
}

/// Splits `digits:dd` into its numeric parts without range checks.
pub(crate) fn split_hh_mm(text: &str) -> Option<(i64, i64)> {
    let (hours, minutes) = text.split_once(':')?;
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(hours) || minutes.len() != 2 || !all_digits(minutes) {
        return None;
    }
    // More than 18 hour digits cannot be represented; treat as malformed.
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

/// Serializes a duration as zero-padded `HH:MM`.
pub fn serialize_duration<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(duration))
}

/// Serializes a duration as unpadded `H:MM`.
pub fn serialize_total<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_total(duration))
}

/// Serializes an optional duration as `HH:MM` or `null`.
pub fn serialize_optional_duration<S: Serializer>(
    duration: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match duration {
        Some(duration) => serializer.serialize_str(&format_duration(duration)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_rejects_single_minute_digit() {
        assert_eq!(split_hh_mm("8:5"), None);
        assert_eq!(split_hh_mm(":30"), None);
        assert_eq!(split_hh_mm("8h30"), None);
        assert_eq!(split_hh_mm("08:30"), Some((8, 30)));
    }
}
