#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};
    use rollcall::libs::attendance::{AttendanceRecord, AttendanceStatus};
    use rollcall::libs::employee::{Employee, EmploymentStatus};
    use rollcall::libs::export::{ExportData, ExportFormat, Exporter};
    use rollcall::libs::summary::SummaryRules;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        employees: Vec<Employee>,
        records: Vec<AttendanceRecord>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let employees = vec![Employee {
                id: 1,
                name: "Asha Rao".to_string(),
                department: "Ops".to_string(),
                status: EmploymentStatus::Payrolled,
                date_of_joining: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                allocated_hours: Some(Duration::minutes(510)),
                shift_start: NaiveTime::from_hms_opt(8, 0, 0),
                shift_end: NaiveTime::from_hms_opt(16, 30, 0),
            }];

            let mut worked = AttendanceRecord::new(1, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
            worked.in_time = NaiveTime::from_hms_opt(8, 0, 0);
            worked.out_time = NaiveTime::from_hms_opt(18, 0, 0);
            worked.working_hours = Duration::minutes(600);
            worked.overtime = Duration::minutes(90);
            let mut absent = AttendanceRecord::new(1, NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
            absent.status = AttendanceStatus::Absent;

            ExportTestContext {
                temp_dir,
                employees,
                records: vec![worked, absent],
            }
        }
    }

    fn month() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_summary_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("summary.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        let written = exporter
            .export(ExportData::Summary, month(), &ctx.employees, &ctx.records, &SummaryRules::default())
            .unwrap();
        assert_eq!(written, output_path);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID,Name,Department,Days Present,Absences,Late Days,Overtime,Sundays Impacted,Balance"
        );
        assert_eq!(lines.next().unwrap(), "1,Asha Rao,Ops,1,1,0,1:30,0,0");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_records_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("records.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        exporter
            .export(ExportData::Records, month(), &ctx.employees, &ctx.records, &SummaryRules::default())
            .unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["month"], "06-2025");
        assert_eq!(json["rows"][0]["name"], "Asha Rao");
        assert_eq!(json["rows"][0]["working_hours"], "10:00");
        assert_eq!(json["rows"][0]["overtime"], "01:30");
        assert_eq!(json["rows"][1]["status"], "absent");
        assert_eq!(json["rows"][1]["in_time"], "");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("summary.xlsx");
        let exporter = Exporter::new(ExportFormat::Excel, Some(output_path.clone()));
        exporter
            .export(ExportData::Summary, month(), &ctx.employees, &ctx.records, &SummaryRules::default())
            .unwrap();

        assert!(output_path.exists());
        assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
    }

    #[test]
    fn test_default_output_name() {
        let exporter = Exporter::new(ExportFormat::Excel, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("rollcall_export_"));
        assert!(name.ends_with(".xlsx"));
    }
}
