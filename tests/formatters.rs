#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};
    use rollcall::libs::formatter::{format_duration, format_total, parse_duration};
    use rollcall::libs::time::{day_key, elapsed, format_form_date, is_sunday, parse_clock, parse_form_date};

    #[test]
    fn test_format_duration_pads_hours() {
        assert_eq!(format_duration(&Duration::minutes(5)), "00:05");
        assert_eq!(format_duration(&Duration::minutes(510)), "08:30");
        assert_eq!(format_duration(&Duration::minutes(1500)), "25:00");
    }

    #[test]
    fn test_format_total_is_unpadded() {
        assert_eq!(format_total(&Duration::minutes(5)), "0:05");
        assert_eq!(format_total(&Duration::minutes(510)), "8:30");
        assert_eq!(format_total(&Duration::minutes(6000)), "100:00");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("8:30"), Some(Duration::minutes(510)));
        assert_eq!(parse_duration("08:30"), Some(Duration::minutes(510)));
        assert_eq!(parse_duration("120:00"), Some(Duration::hours(120)));
        assert_eq!(parse_duration("08:60"), None);
        assert_eq!(parse_duration("eight"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn test_parse_clock_rejects_out_of_range() {
        assert_eq!(parse_clock("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
        assert_eq!(parse_clock("25:99"), None);
        assert_eq!(parse_clock("24:00"), None);
        assert_eq!(parse_clock("12:60"), None);
        assert_eq!(parse_clock("12-30"), None);
    }

    #[test]
    fn test_elapsed_wraps_midnight() {
        let late = NaiveTime::from_hms_opt(23, 30, 0).unwrap();
        let early = NaiveTime::from_hms_opt(0, 15, 0).unwrap();
        assert_eq!(elapsed(&late, &early), Duration::minutes(45));
        assert_eq!(elapsed(&early, &late), Duration::minutes(1395));
    }

    #[test]
    fn test_form_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(parse_form_date("01-06-2025"), Some(date));
        assert_eq!(format_form_date(&date), "01-06-2025");
        assert_eq!(day_key(&date), "01-06-25");
        assert!(is_sunday(&date));

        assert_eq!(parse_form_date("2025-06-01"), None);
        assert_eq!(parse_form_date("1-6-2025"), None);
        assert_eq!(parse_form_date("31-02-2025"), None);
    }
}
