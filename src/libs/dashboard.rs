//! Organization-wide attendance statistics.

use chrono::NaiveDate;
use serde::Serialize;

use super::{
    attendance::{self, AttendanceRecord},
    employee::{self, Employee},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub overtime_records: usize,
    pub sundays_worked: usize,
    /// Whole percent of expected attendance that was present.
    pub attendance_rate: u32,
}

impl DashboardStats {
    /// Aggregates `records` over a period of `days_in_period` days.
    ///
    /// Expected attendance is every employee on every day of the period, so
    /// absences include days without any record at all.
    pub fn collect(employees: &[Employee], records: &[AttendanceRecord], days_in_period: u32) -> Self {
        let present = records.iter().filter(|r| r.is_present()).count();
        let expected = employees.len() * days_in_period as usize;

        let attendance_rate = if expected == 0 {
            0
        } else {
            ((present as f64 / expected as f64) * 100.0).round() as u32
        };

        Self {
            present,
            absent: expected.saturating_sub(present),
            late: records.iter().filter(|r| r.is_late).count(),
            overtime_records: records.iter().filter(|r| r.has_overtime()).count(),
            sundays_worked: records.iter().filter(|r| r.is_sunday && r.is_present()).count(),
            attendance_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentSummary {
    pub name: String,
    pub total_employees: usize,
    pub present_today: usize,
    pub absent_today: usize,
    pub late_today: usize,
}

/// Daily figures per department, in first-seen roster order.
pub fn department_summaries(
    employees: &[Employee],
    records: &[AttendanceRecord],
    day: &NaiveDate,
) -> Vec<DepartmentSummary> {
    let today = attendance::on_day(records, day);

    employee::departments(employees)
        .into_iter()
        .map(|name| {
            let members: Vec<&Employee> = employees.iter().filter(|e| e.department == name).collect();
            let member_records: Vec<&&AttendanceRecord> = today
                .iter()
                .filter(|r| members.iter().any(|e| e.id == r.employee_id))
                .collect();

            let present_today = member_records.iter().filter(|r| r.is_present()).count();
            DepartmentSummary {
                total_employees: members.len(),
                present_today,
                absent_today: members.len().saturating_sub(present_today),
                late_today: member_records.iter().filter(|r| r.is_late).count(),
                name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_is_zero_without_employees() {
        let stats = DashboardStats::collect(&[], &[], 30);
        assert_eq!(stats.attendance_rate, 0);
        assert_eq!(stats.absent, 0);
    }
}
