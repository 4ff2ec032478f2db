#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use rollcall::libs::attendance::{AttendanceRecord, AttendanceStatus};
    use rollcall::libs::dashboard::{department_summaries, DashboardStats};
    use rollcall::libs::employee::{Employee, EmploymentStatus};

    fn employee(id: i64, department: &str) -> Employee {
        Employee {
            id,
            name: format!("E{id}"),
            department: department.to_string(),
            status: EmploymentStatus::Payrolled,
            date_of_joining: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            allocated_hours: None,
            shift_start: None,
            shift_end: None,
        }
    }

    fn record(employee_id: i64, d: u32, status: AttendanceStatus) -> AttendanceRecord {
        let mut record = AttendanceRecord::new(employee_id, NaiveDate::from_ymd_opt(2025, 6, d).unwrap());
        record.status = status;
        record
    }

    #[test]
    fn test_collect_stats() {
        let employees = vec![employee(1, "Ops"), employee(2, "Ops")];
        let mut late = record(2, 2, AttendanceStatus::Present);
        late.is_late = true;
        let mut overtime = record(1, 3, AttendanceStatus::Present);
        overtime.overtime = Duration::minutes(45);
        let records = vec![
            record(1, 1, AttendanceStatus::Present), // Sunday
            record(1, 2, AttendanceStatus::Present),
            late,
            overtime,
            record(2, 3, AttendanceStatus::Absent),
        ];

        let stats = DashboardStats::collect(&employees, &records, 5);
        assert_eq!(stats.present, 4);
        assert_eq!(stats.absent, 6);
        assert_eq!(stats.late, 1);
        assert_eq!(stats.overtime_records, 1);
        assert_eq!(stats.sundays_worked, 1);
        assert_eq!(stats.attendance_rate, 40);
    }

    #[test]
    fn test_absent_never_underflows() {
        let employees = vec![employee(1, "Ops")];
        let records: Vec<_> = (1..=3).map(|d| record(1, d, AttendanceStatus::Present)).collect();
        let stats = DashboardStats::collect(&employees, &records, 2);
        assert_eq!(stats.absent, 0);
        assert_eq!(stats.attendance_rate, 150);
    }

    #[test]
    fn test_department_summaries_match_day_only() {
        let employees = vec![employee(1, "Ops"), employee(2, "Finance"), employee(3, "Ops")];
        let mut late = record(3, 2, AttendanceStatus::Present);
        late.is_late = true;
        let records = vec![
            record(1, 2, AttendanceStatus::Present),
            late,
            record(2, 2, AttendanceStatus::Absent),
            record(2, 3, AttendanceStatus::Present),
        ];

        let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let summaries = department_summaries(&employees, &records, &day);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "Ops");
        assert_eq!(summaries[0].total_employees, 2);
        assert_eq!(summaries[0].present_today, 2);
        assert_eq!(summaries[0].absent_today, 0);
        assert_eq!(summaries[0].late_today, 1);

        assert_eq!(summaries[1].name, "Finance");
        assert_eq!(summaries[1].present_today, 0);
        assert_eq!(summaries[1].absent_today, 1);
    }
}
