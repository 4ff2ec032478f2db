#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};
    use rollcall::libs::attendance::AttendanceStatus;
    use rollcall::libs::employee::{Employee, EmploymentStatus};
    use rollcall::libs::entry::AttendanceEntry;
    use rollcall::libs::formatter::format_duration;
    use rollcall::libs::working_hours::WorkingHoursCalculator;

    fn employee(id: i64, allocated: Option<Duration>) -> Employee {
        Employee {
            id,
            name: format!("Employee {id}"),
            department: "Ops".to_string(),
            status: EmploymentStatus::Payrolled,
            date_of_joining: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            allocated_hours: allocated,
            shift_start: NaiveTime::from_hms_opt(8, 0, 0),
            shift_end: NaiveTime::from_hms_opt(16, 30, 0),
        }
    }

    #[test]
    fn test_build_weekday_record() {
        let roster = vec![employee(1, Some(Duration::minutes(510)))];
        let entry = AttendanceEntry::new(1, "02-06-2025", "08:05", "16:30");

        let record = entry.build(&roster, &WorkingHoursCalculator::default()).unwrap();
        assert_eq!(record.employee_id, 1);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert_eq!(record.in_time, NaiveTime::from_hms_opt(8, 5, 0));
        assert_eq!(record.out_time, NaiveTime::from_hms_opt(16, 30, 0));
        assert_eq!(format_duration(&record.working_hours), "08:30");
        assert_eq!(record.status, AttendanceStatus::Present);
        assert!(!record.is_sunday);
        assert!(!record.is_late);
        assert!(!record.is_holiday);
        assert_eq!(record.overtime, Duration::zero());
    }

    #[test]
    fn test_build_sunday_record_uses_allocation() {
        let roster = vec![employee(1, Some(Duration::minutes(480)))];
        let entry = AttendanceEntry::new(1, "01-06-2025", "10:00", "12:00");

        let record = entry.build(&roster, &WorkingHoursCalculator::default()).unwrap();
        assert!(record.is_sunday);
        assert_eq!(format_duration(&record.working_hours), "08:00");
    }

    #[test]
    fn test_build_sunday_without_allocation_uses_times() {
        let roster = vec![employee(1, None)];
        let entry = AttendanceEntry::new(1, "01-06-2025", "10:00", "12:00");

        let record = entry.build(&roster, &WorkingHoursCalculator::default()).unwrap();
        assert_eq!(format_duration(&record.working_hours), "02:00");
    }

    #[test]
    fn test_invalid_fields_are_all_reported() {
        let roster = vec![employee(1, None)];
        let entry = AttendanceEntry::new(1, "2025-06-02", "25:99", "8am");

        let errors = entry.build(&roster, &WorkingHoursCalculator::default()).unwrap_err();
        assert_eq!(errors.errors().len(), 3);
        assert_eq!(
            errors.for_field("date").unwrap().to_string(),
            "date: Date must be in DD-MM-YYYY format"
        );
        assert_eq!(
            errors.for_field("inTime").unwrap().to_string(),
            "inTime: Time must be in HH:MM format"
        );
        assert!(errors.for_field("outTime").is_some());
    }
}
