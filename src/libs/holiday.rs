use chrono::NaiveDate;
use serde::Serialize;

use super::{
    time::serialize_form_date,
    validation::{date_field, ValidationError, ValidationErrors},
};

/// A named non-working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    #[serde(serialize_with = "serialize_form_date")]
    pub date: NaiveDate,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct HolidayInput {
    pub date: String,
    pub name: String,
}

impl HolidayInput {
    pub fn validate(&self) -> Result<Holiday, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let date = date_field(&mut errors, "date", &self.date);
        let name = self.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::Required {
                field: "name",
                message: "Please enter a holiday name",
            });
        }

        match date {
            Some(date) if errors.is_empty() => Ok(Holiday {
                date,
                name: name.to_string(),
            }),
            _ => Err(errors),
        }
    }
}
