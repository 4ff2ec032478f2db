#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};
    use rollcall::db::attendance::AttendanceRecords;
    use rollcall::db::employees::Employees;
    use rollcall::db::holidays::Holidays;
    use rollcall::db::store::Store;
    use rollcall::libs::attendance::{AttendanceRecord, AttendanceStatus};
    use rollcall::libs::employee::{EmployeeRegistration, EmploymentStatus};
    use rollcall::libs::holiday::HolidayInput;
    use rollcall::libs::source::{AttendanceSink, AttendanceSource};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StoreTestContext { _temp_dir: temp_dir }
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    // Storage tests share the process-wide HOME variable, so they run as one
    // sequential workflow.
    #[test_context(StoreTestContext)]
    #[test]
    fn test_store_workflow(_ctx: &mut StoreTestContext) {
        // Employees
        let mut employees = Employees::new().unwrap();
        let registration = EmployeeRegistration {
            name: "Asha Rao".to_string(),
            department: "Ops".to_string(),
            status: EmploymentStatus::NonPayrolled,
            date_of_joining: "02-01-2024".to_string(),
            allocated_hours: "08:30".to_string(),
            shift_start: "08:00".to_string(),
            shift_end: "16:30".to_string(),
        };
        let asha = employees.insert(&registration.validate().unwrap()).unwrap();
        let mut second = registration.validate().unwrap();
        second.name = "Bilal".to_string();
        second.allocated_hours = None;
        second.shift_start = None;
        let bilal = employees.insert(&second).unwrap();
        assert!(bilal.id > asha.id);

        let fetched = employees.fetch(asha.id).unwrap().unwrap();
        assert_eq!(fetched, asha);
        assert_eq!(fetched.allocated_hours, Some(Duration::minutes(510)));
        assert_eq!(fetched.shift_end, NaiveTime::from_hms_opt(16, 30, 0));
        assert_eq!(employees.fetch(bilal.id).unwrap().unwrap().shift_start, None);
        assert!(employees.fetch(999).unwrap().is_none());
        assert!(employees.get(999).is_err());
        assert_eq!(employees.list().unwrap().len(), 2);

        // Attendance: one record per employee and date
        let mut attendance = AttendanceRecords::new().unwrap();
        let mut record = AttendanceRecord::new(asha.id, date(2));
        record.in_time = NaiveTime::from_hms_opt(8, 5, 0);
        record.out_time = NaiveTime::from_hms_opt(16, 30, 0);
        record.working_hours = Duration::minutes(510);
        attendance.upsert(&record).unwrap();

        let mut corrected = record.clone();
        corrected.out_time = NaiveTime::from_hms_opt(18, 0, 0);
        corrected.working_hours = Duration::minutes(595);
        corrected.overtime = Duration::minutes(85);
        attendance.upsert(&corrected).unwrap();

        let day = attendance.fetch_day(date(2)).unwrap();
        assert_eq!(day, vec![corrected.clone()]);

        let mut absent = AttendanceRecord::new(bilal.id, date(1));
        absent.status = AttendanceStatus::Absent;
        let july = AttendanceRecord::new(asha.id, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(attendance.save_all(&[absent.clone(), july]).unwrap(), 2);

        let june = attendance.fetch_month(date(15)).unwrap();
        assert_eq!(june, vec![absent.clone(), corrected.clone()]);
        assert!(june[0].is_sunday);
        assert_eq!(attendance.fetch_for_employee(asha.id).unwrap().len(), 2);
        assert_eq!(attendance.fetch_all().unwrap().len(), 3);

        // Store as source and sink
        let mut store = Store::new().unwrap();
        assert_eq!(store.employees().ready().unwrap().len(), 2);
        assert_eq!(store.records(date(1)).ready().unwrap().len(), 2);
        let mut leave = AttendanceRecord::new(bilal.id, date(3));
        leave.status = AttendanceStatus::Leave;
        assert_eq!(store.save(&[leave]).unwrap(), 1);
        assert_eq!(store.records(date(1)).ready().unwrap().len(), 3);

        // Holidays
        let mut holidays = Holidays::new().unwrap();
        let founding = HolidayInput {
            date: "10-06-2025".to_string(),
            name: "Founding Day".to_string(),
        }
        .validate()
        .unwrap();
        let new_year = HolidayInput {
            date: "01-01-2025".to_string(),
            name: "New Year".to_string(),
        }
        .validate()
        .unwrap();
        holidays.insert(&founding).unwrap();
        holidays.insert(&new_year).unwrap();

        let listed = holidays.list().unwrap();
        assert_eq!(listed, vec![new_year.clone(), founding.clone()]);
        assert_eq!(holidays.fetch(date(10)).unwrap(), Some(founding));

        holidays.delete(date(10)).unwrap();
        assert!(holidays.fetch(date(10)).unwrap().is_none());
        assert!(holidays.delete(date(10)).is_err());
    }
}
