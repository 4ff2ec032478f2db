#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use rollcall::libs::attendance::AttendanceRecord;
    use rollcall::libs::source::{AttendanceSink, Fetch};

    #[test]
    fn test_fetch_states() {
        let loading: Fetch<Vec<i32>> = Fetch::Loading;
        assert!(loading.is_loading());
        assert!(loading.ready().unwrap_err().to_string().contains("still loading"));

        let failed: Fetch<Vec<i32>> = Fetch::from_result(Err(anyhow::anyhow!("disk on fire")));
        assert!(failed.ready().unwrap_err().to_string().contains("disk on fire"));

        let ready = Fetch::Ready(vec![1, 2, 3]).map(|v| v.len());
        assert_eq!(ready.ready().unwrap(), 3);
    }

    #[test]
    fn test_vec_sink_replaces_same_employee_and_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let mut sink: Vec<AttendanceRecord> = Vec::new();

        let first = AttendanceRecord::new(1, date);
        let mut second = AttendanceRecord::new(1, date);
        second.working_hours = Duration::hours(8);

        assert_eq!(sink.save(&[first]).unwrap(), 1);
        assert_eq!(sink.save(&[second, AttendanceRecord::new(2, date)]).unwrap(), 2);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].working_hours, Duration::hours(8));
    }
}
