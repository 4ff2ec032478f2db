//! Employee roster model, registration form and roster filter.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    formatter::serialize_optional_duration,
    time::{serialize_form_date, serialize_optional_clock},
    validation::{clock_field, date_field, hours_field, ValidationError, ValidationErrors},
};

pub type EmployeeId = i64;

/// Minimum length of a registered employee name.
pub const MIN_NAME_LENGTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum EmploymentStatus {
    #[default]
    #[serde(rename = "PAYROLLED")]
    Payrolled,
    #[serde(rename = "NON-PAYROLLED")]
    NonPayrolled,
}

impl EmploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::Payrolled => "PAYROLLED",
            EmploymentStatus::NonPayrolled => "NON-PAYROLLED",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_uppercase().as_str() {
            "PAYROLLED" => Some(EmploymentStatus::Payrolled),
            "NON-PAYROLLED" => Some(EmploymentStatus::NonPayrolled),
            _ => None,
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered employee.
///
/// Allocated hours and shift times may be unknown for employees imported from
/// older data; the working-hours rules treat a missing allocation as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub status: EmploymentStatus,
    #[serde(serialize_with = "serialize_form_date")]
    pub date_of_joining: NaiveDate,
    #[serde(serialize_with = "serialize_optional_duration")]
    pub allocated_hours: Option<Duration>,
    #[serde(serialize_with = "serialize_optional_clock")]
    pub shift_start: Option<NaiveTime>,
    #[serde(serialize_with = "serialize_optional_clock")]
    pub shift_end: Option<NaiveTime>,
}

/// A validated registration that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub department: String,
    pub status: EmploymentStatus,
    pub date_of_joining: NaiveDate,
    pub allocated_hours: Option<Duration>,
    pub shift_start: Option<NaiveTime>,
    pub shift_end: Option<NaiveTime>,
}

impl NewEmployee {
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            department: self.department,
            status: self.status,
            date_of_joining: self.date_of_joining,
            allocated_hours: self.allocated_hours,
            shift_start: self.shift_start,
            shift_end: self.shift_end,
        }
    }
}

/// Raw registration input, exactly as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct EmployeeRegistration {
    pub name: String,
    pub department: String,
    pub status: EmploymentStatus,
    pub date_of_joining: String,
    pub allocated_hours: String,
    pub shift_start: String,
    pub shift_end: String,
}

impl EmployeeRegistration {
    /// Checks every field and returns all failures at once.
    pub fn validate(&self) -> Result<NewEmployee, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim().to_string();
        if name.chars().count() < MIN_NAME_LENGTH {
            errors.push(ValidationError::TooShort {
                field: "name",
                min: MIN_NAME_LENGTH,
            });
        }
        let department = self.department.trim().to_string();
        if department.is_empty() {
            errors.push(ValidationError::Required {
                field: "department",
                message: "Please select a department",
            });
        }

        let date_of_joining = date_field(&mut errors, "doj", &self.date_of_joining);
        let allocated_hours = hours_field(&mut errors, "allocatedHours", &self.allocated_hours);
        let shift_start = clock_field(&mut errors, "shiftStart", &self.shift_start);
        let shift_end = clock_field(&mut errors, "shiftEnd", &self.shift_end);

        match date_of_joining {
            Some(date_of_joining) if errors.is_empty() => Ok(NewEmployee {
                name,
                department,
                status: self.status,
                date_of_joining,
                allocated_hours,
                shift_start,
                shift_end,
            }),
            _ => Err(errors),
        }
    }
}

/// Roster filter by department, employment status and free-text search.
///
/// `None` in a field means "all". The search matches case-insensitively
/// against the name and the department.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub status: Option<EmploymentStatus>,
    pub search: Option<String>,
}

impl EmployeeFilter {
    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.status.is_none() && self.search.as_deref().map_or(true, str::is_empty)
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_fields(&employee.name, &employee.department, employee.status)
    }

    pub fn matches_fields(&self, name: &str, department: &str, status: EmploymentStatus) -> bool {
        if let Some(wanted) = &self.department {
            if wanted != department {
                return false;
            }
        }
        if let Some(wanted) = self.status {
            if wanted != status {
                return false;
            }
        }
        match self.search.as_deref().map(str::to_lowercase) {
            Some(query) if !query.is_empty() => {
                name.to_lowercase().contains(&query) || department.to_lowercase().contains(&query)
            }
            _ => true,
        }
    }

    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Unique departments in first-seen roster order.
pub fn departments(employees: &[Employee]) -> Vec<String> {
    let mut departments: Vec<String> = Vec::new();
    for employee in employees {
        if !departments.contains(&employee.department) {
            departments.push(employee.department.clone());
        }
    }
    departments
}

pub fn find(employees: &[Employee], id: EmployeeId) -> Option<&Employee> {
    employees.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(EmploymentStatus::parse("payrolled"), Some(EmploymentStatus::Payrolled));
        assert_eq!(EmploymentStatus::parse("NON-PAYROLLED"), Some(EmploymentStatus::NonPayrolled));
        assert_eq!(EmploymentStatus::parse("contract"), None);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let filter = EmployeeFilter {
            search: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert!(filter.matches_fields("A", "B", EmploymentStatus::NonPayrolled));
    }
}
