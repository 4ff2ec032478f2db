#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};
    use rollcall::libs::employee::{
        departments, Employee, EmployeeFilter, EmployeeRegistration, EmploymentStatus,
    };

    fn registration() -> EmployeeRegistration {
        EmployeeRegistration {
            name: "Asha Rao".to_string(),
            department: "Ops".to_string(),
            status: EmploymentStatus::NonPayrolled,
            date_of_joining: "02-01-2024".to_string(),
            allocated_hours: "8:30".to_string(),
            shift_start: "08:00".to_string(),
            shift_end: "16:30".to_string(),
        }
    }

    fn roster() -> Vec<Employee> {
        ["Asha:Ops", "Bilal:Finance", "Chen:Ops", "Dana:HR"]
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let (name, department) = spec.split_once(':').unwrap();
                registration()
                    .validate()
                    .map(|mut e| {
                        e.name = name.to_string();
                        e.department = department.to_string();
                        if i % 2 == 1 {
                            e.status = EmploymentStatus::Payrolled;
                        }
                        e.with_id(i as i64 + 1)
                    })
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_valid_registration() {
        let employee = registration().validate().unwrap();
        assert_eq!(employee.name, "Asha Rao");
        assert_eq!(employee.date_of_joining, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(employee.allocated_hours, Some(Duration::minutes(510)));
        assert_eq!(employee.shift_start, NaiveTime::from_hms_opt(8, 0, 0));
        assert_eq!(employee.shift_end, NaiveTime::from_hms_opt(16, 30, 0));
    }

    #[test]
    fn test_registration_reports_every_field() {
        let input = EmployeeRegistration {
            name: "A".to_string(),
            department: "  ".to_string(),
            status: EmploymentStatus::Payrolled,
            date_of_joining: "2024-01-02".to_string(),
            allocated_hours: "830".to_string(),
            shift_start: "8".to_string(),
            shift_end: "16:3".to_string(),
        };
        let errors = input.validate().unwrap_err();

        for field in ["name", "department", "doj", "allocatedHours", "shiftStart", "shiftEnd"] {
            assert!(errors.for_field(field).is_some(), "missing error for {field}");
        }
        assert_eq!(
            errors.for_field("department").unwrap().to_string(),
            "department: Please select a department"
        );
    }

    #[test]
    fn test_allocated_hours_limited_to_two_hour_digits() {
        let mut input = registration();
        input.allocated_hours = "100:00".to_string();
        assert!(input.validate().unwrap_err().for_field("allocatedHours").is_some());
    }

    #[test]
    fn test_filter_by_department_and_status() {
        let roster = roster();

        let ops = EmployeeFilter {
            department: Some("Ops".to_string()),
            ..Default::default()
        };
        let names: Vec<&str> = ops.apply(&roster).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Chen"]);

        let payrolled = EmployeeFilter {
            status: Some(EmploymentStatus::Payrolled),
            ..Default::default()
        };
        let names: Vec<&str> = payrolled.apply(&roster).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bilal", "Dana"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_department() {
        let roster = roster();
        let by_name = EmployeeFilter {
            search: Some("CHE".to_string()),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&roster).len(), 1);

        let by_department = EmployeeFilter {
            search: Some("fin".to_string()),
            ..Default::default()
        };
        assert_eq!(by_department.apply(&roster)[0].name, "Bilal");
    }

    #[test]
    fn test_empty_filter_keeps_roster_order() {
        let roster = roster();
        let all = EmployeeFilter::default().apply(&roster);
        assert_eq!(all.len(), roster.len());
        assert_eq!(all[0].id, 1);
    }

    #[test]
    fn test_departments_in_first_seen_order() {
        assert_eq!(departments(&roster()), vec!["Ops", "Finance", "HR"]);
    }

    #[test]
    fn test_status_serializes_in_upper_case() {
        let json = serde_json::to_value(&roster()[0]).unwrap();
        assert_eq!(json["status"], "NON-PAYROLLED");
        assert_eq!(json["date_of_joining"], "02-01-2024");
        assert_eq!(json["allocated_hours"], "08:30");
    }
}
