//! Display implementation for rollcall messages.
//!
//! All user-facing text lives in this single match so that wording stays
//! consistent between commands. Parameters are interpolated with `format!`.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === EMPLOYEE MESSAGES ===
            Message::EmployeeRegistered(name, id) => format!("{} has been registered with ID {}.", name, id),
            Message::EmployeeNotFound(id) => format!("Employee with ID {} not found.", id),
            Message::NoEmployees => "No employees registered yet.".to_string(),
            Message::EmployeesHeader => "Employees".to_string(),
            Message::EmployeeDetailsHeader(name) => format!("Schedule details for {}", name),

            // === ATTENDANCE ENTRY MESSAGES ===
            Message::AttendanceRecorded(name, date) => format!("{}'s attendance for {} has been recorded.", name, date),
            Message::BulkAttendanceRecorded(count, date) => {
                format!("Attendance for {} employees on {} has been recorded.", count, date)
            }
            Message::AttendanceRecordFailed(error) => {
                format!("There was a problem recording the attendance. Please try again. ({})", error)
            }
            Message::AttendanceForDate(date) => format!("Attendance for {}", date),
            Message::NoRecordsForDate(date) => format!("No attendance records found for {}.", date),
            Message::SundayDetected => "Sunday detected: working hours are filled with allocated hours.".to_string(),
            Message::HolidayDetected(name) => format!("Holiday detected: {}", name),
            Message::NoEmployeesSelected => "Please select at least one employee to record attendance.".to_string(),
            Message::BulkSelection(selected, visible) => format!("{} of {} employees selected", selected, visible),
            Message::BulkRowUnknown(id) => format!("Employee {} is not part of the loaded list.", id),
            Message::InvalidTimeOverride(raw) => {
                format!("Invalid time override '{}'. Expected ID=HH:MM-HH:MM.", raw)
            }

            // === VALIDATION MESSAGES ===
            Message::ValidationFailed => "Please fix the following fields:".to_string(),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(month) => format!("Attendance summary for {}", month),
            Message::DashboardHeader(month) => format!("Attendance dashboard for {}", month),
            Message::DepartmentsHeader(date) => format!("Departments on {}", date),

            // === HOLIDAY MESSAGES ===
            Message::HolidayAdded(name, date) => format!("{} ({}) has been added to the holiday list.", name, date),
            Message::HolidayRemoved(date) => format!("Holiday on {} has been removed.", date),
            Message::HolidayNotFound(date) => format!("No holiday found on {}.", date),
            Message::NoHolidays => "No holidays added yet.".to_string(),
            Message::HolidaysHeader => "Holidays".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleRules => "Attendance rules".to_string(),
            Message::PromptToleranceMinutes => "Tolerance window in minutes".to_string(),
            Message::PromptOvertimeDayHours => "Overtime hours counted as one day".to_string(),
            Message::RuleOutOfRange(setting, value) => {
                format!("Rule '{}' is out of range: {}", setting, value)
            }
            Message::ConfigReadFailed(error) => {
                format!("Failed to read configuration, starting from defaults: {}", error)
            }

            // === DATA SOURCE MESSAGES ===
            Message::DataStillLoading => "Data is still loading.".to_string(),
            Message::DataFetchFailed(error) => format!("Failed to load data: {}", error),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} as {}...", data, format),
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
        };
        write!(f, "{}", text)
    }
}
