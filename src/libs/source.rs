//! Where attendance data comes from and where it goes.
//!
//! Reads resolve to a [`Fetch`], which keeps "still loading" and "failed"
//! apart from an empty result. Writes go through an [`AttendanceSink`]; a
//! failed save is reported to the caller and never retried.

use anyhow::Result;
use chrono::NaiveDate;

use super::{attendance::AttendanceRecord, employee::Employee, messages::Message};
use crate::msg_error_anyhow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Fetch<T> {
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => Fetch::Ready(value),
            Err(e) => Fetch::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    /// The loaded value, or an error describing why there is none.
    pub fn ready(self) -> Result<T> {
        match self {
            Fetch::Ready(value) => Ok(value),
            Fetch::Loading => Err(msg_error_anyhow!(Message::DataStillLoading)),
            Fetch::Failed(reason) => Err(msg_error_anyhow!(Message::DataFetchFailed(reason))),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetch<U> {
        match self {
            Fetch::Loading => Fetch::Loading,
            Fetch::Ready(value) => Fetch::Ready(f(value)),
            Fetch::Failed(reason) => Fetch::Failed(reason),
        }
    }
}

pub trait AttendanceSource {
    fn employees(&mut self) -> Fetch<Vec<Employee>>;

    /// Records of the calendar month containing `month`.
    fn records(&mut self, month: NaiveDate) -> Fetch<Vec<AttendanceRecord>>;
}

pub trait AttendanceSink {
    /// Persists `records` and returns how many were written.
    fn save(&mut self, records: &[AttendanceRecord]) -> Result<usize>;
}

impl AttendanceSink for Vec<AttendanceRecord> {
    fn save(&mut self, records: &[AttendanceRecord]) -> Result<usize> {
        for record in records {
            match self
                .iter_mut()
                .find(|r| r.employee_id == record.employee_id && r.date == record.date)
            {
                Some(existing) => *existing = record.clone(),
                None => self.push(record.clone()),
            }
        }
        Ok(records.len())
    }
}
