//! Attendance records: one per employee per calendar day.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Serialize;
use std::fmt;

use super::{
    employee::EmployeeId,
    formatter::serialize_duration,
    time::{self, serialize_form_date, serialize_optional_clock},
};

/// What happened on the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Leave,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Leave => "leave",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "present" => Some(AttendanceStatus::Present),
            "absent" => Some(AttendanceStatus::Absent),
            "leave" => Some(AttendanceStatus::Leave),
            _ => None,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub employee_id: EmployeeId,
    #[serde(serialize_with = "serialize_form_date")]
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_optional_clock")]
    pub in_time: Option<NaiveTime>,
    #[serde(serialize_with = "serialize_optional_clock")]
    pub out_time: Option<NaiveTime>,
    #[serde(serialize_with = "serialize_duration")]
    pub working_hours: Duration,
    #[serde(serialize_with = "serialize_duration")]
    pub overtime: Duration,
    pub status: AttendanceStatus,
    pub is_late: bool,
    pub is_holiday: bool,
    pub is_sunday: bool,
}

impl AttendanceRecord {
    /// A present record for `date` with no times and zero hours.
    ///
    /// The Sunday flag is derived from the date.
    pub fn new(employee_id: EmployeeId, date: NaiveDate) -> Self {
        Self {
            employee_id,
            date,
            in_time: None,
            out_time: None,
            working_hours: Duration::zero(),
            overtime: Duration::zero(),
            status: AttendanceStatus::Present,
            is_late: false,
            is_holiday: false,
            is_sunday: time::is_sunday(&date),
        }
    }

    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }

    /// `DD-MM-YY` key of the record's day.
    pub fn day_key(&self) -> String {
        time::day_key(&self.date)
    }

    pub fn has_overtime(&self) -> bool {
        self.overtime > Duration::zero()
    }
}

/// Records whose day key matches `date`.
pub fn on_day<'a>(records: &'a [AttendanceRecord], date: &NaiveDate) -> Vec<&'a AttendanceRecord> {
    let key = time::day_key(date);
    records.iter().filter(|r| r.day_key() == key).collect()
}
