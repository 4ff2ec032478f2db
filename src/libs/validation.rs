//! Field-level validation errors for attendance and registration input.
//!
//! Every error names the field it belongs to so the caller can show the
//! message next to the offending input. A form collects all failures into a
//! [`ValidationErrors`] list instead of stopping at the first one.

use chrono::{Duration, NaiveDate, NaiveTime};
use std::fmt;
use thiserror::Error;

use super::{formatter::parse_duration, time};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    Required { field: &'static str, message: &'static str },

    #[error("{field}: must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field}: Date must be in DD-MM-YYYY format")]
    InvalidDate { field: &'static str },

    #[error("{field}: Time must be in HH:MM format")]
    InvalidTime { field: &'static str },

    #[error("employeeId: employee {0} is not registered")]
    UnknownEmployee(i64),

    #[error("employees: no employees selected")]
    NoEmployeesSelected,
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field, .. }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidDate { field }
            | ValidationError::InvalidTime { field } => *field,
            ValidationError::UnknownEmployee(_) => "employeeId",
            ValidationError::NoEmployeesSelected => "employees",
        }
    }
}

/// All failures found in one form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Looks up the error reported for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", lines.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub(crate) fn date_field(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
) -> Option<NaiveDate> {
    let parsed = time::parse_form_date(value);
    if parsed.is_none() {
        errors.push(ValidationError::InvalidDate { field });
    }
    parsed
}

pub(crate) fn clock_field(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
) -> Option<NaiveTime> {
    let parsed = time::parse_clock(value);
    if parsed.is_none() {
        errors.push(ValidationError::InvalidTime { field });
    }
    parsed
}

/// Allocated hours use the clock pattern (`H:MM`/`HH:MM`) but are a duration.
pub(crate) fn hours_field(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
) -> Option<Duration> {
    let value = value.trim();
    let (hours, _) = value.split_once(':').unwrap_or((value, ""));
    let parsed = if hours.len() <= 2 { parse_duration(value) } else { None };
    if parsed.is_none() {
        errors.push(ValidationError::InvalidTime { field });
    }
    parsed
}
