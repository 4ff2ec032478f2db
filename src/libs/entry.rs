//! Single-employee attendance entry.
//!
//! [`AttendanceEntry`] holds the raw form input. [`AttendanceEntry::build`]
//! validates every field, looks the employee up in the roster and produces a
//! present [`AttendanceRecord`] with its credited working hours. Lateness,
//! holiday and overtime are left at their defaults.

use super::{
    attendance::AttendanceRecord,
    employee::{self, Employee, EmployeeId},
    time,
    validation::{clock_field, date_field, ValidationError, ValidationErrors},
    working_hours::WorkingHoursCalculator,
};

#[derive(Debug, Clone, Default)]
pub struct AttendanceEntry {
    pub employee_id: Option<EmployeeId>,
    pub date: String,
    pub in_time: String,
    pub out_time: String,
}

impl AttendanceEntry {
    pub fn new(employee_id: EmployeeId, date: &str, in_time: &str, out_time: &str) -> Self {
        Self {
            employee_id: Some(employee_id),
            date: date.to_string(),
            in_time: in_time.to_string(),
            out_time: out_time.to_string(),
        }
    }

    /// Validates the form and builds the record, crediting hours through
    /// `calculator`. On a Sunday an employee without allocated hours is
    /// credited the elapsed time, not `00:00`.
    pub fn build(
        &self,
        roster: &[Employee],
        calculator: &WorkingHoursCalculator,
    ) -> Result<AttendanceRecord, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let employee = match self.employee_id {
            None => {
                errors.push(ValidationError::Required {
                    field: "employeeId",
                    message: "Please select an employee",
                });
                None
            }
            Some(id) => {
                let found = employee::find(roster, id);
                if found.is_none() {
                    errors.push(ValidationError::UnknownEmployee(id));
                }
                found
            }
        };
        let date = date_field(&mut errors, "date", &self.date);
        let in_time = clock_field(&mut errors, "inTime", &self.in_time);
        let out_time = clock_field(&mut errors, "outTime", &self.out_time);

        let (employee, date) = match (employee, date) {
            (Some(employee), Some(date)) if errors.is_empty() => (employee, date),
            _ => return Err(errors),
        };

        let is_sunday = time::is_sunday(&date);
        let mut record = AttendanceRecord::new(employee.id, date);
        record.in_time = in_time;
        record.out_time = out_time;
        record.working_hours = calculator.compute(in_time, out_time, employee.allocated_hours, is_sunday);

        tracing::debug!(
            employee = employee.id,
            date = %time::day_key(&date),
            minutes = record.working_hours.num_minutes(),
            "built attendance record"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::employee::EmploymentStatus;
    use chrono::{Duration, NaiveDate, NaiveTime};

    fn roster() -> Vec<Employee> {
        vec![Employee {
            id: 7,
            name: "Ravi".into(),
            department: "Ops".into(),
            status: EmploymentStatus::Payrolled,
            date_of_joining: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
            allocated_hours: Some(Duration::minutes(510)),
            shift_start: NaiveTime::from_hms_opt(8, 0, 0),
            shift_end: NaiveTime::from_hms_opt(16, 30, 0),
        }]
    }

    #[test]
    fn test_missing_employee_is_a_field_error() {
        let entry = AttendanceEntry {
            employee_id: None,
            date: "02-06-2025".into(),
            in_time: "08:00".into(),
            out_time: "16:30".into(),
        };
        let errors = entry.build(&roster(), &WorkingHoursCalculator::default()).unwrap_err();
        assert!(errors.for_field("employeeId").is_some());
    }

    #[test]
    fn test_unknown_employee_is_rejected() {
        let entry = AttendanceEntry::new(99, "02-06-2025", "08:00", "16:30");
        let errors = entry.build(&roster(), &WorkingHoursCalculator::default()).unwrap_err();
        assert_eq!(errors.errors(), &[ValidationError::UnknownEmployee(99)]);
    }
}
