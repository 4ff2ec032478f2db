//! SQLite-backed [`AttendanceSource`] and [`AttendanceSink`].

use crate::db::{attendance::AttendanceRecords, employees::Employees};
use crate::libs::attendance::AttendanceRecord;
use crate::libs::employee::Employee;
use crate::libs::source::{AttendanceSink, AttendanceSource, Fetch};
use anyhow::Result;
use chrono::NaiveDate;

pub struct Store {
    pub employees: Employees,
    pub attendance: AttendanceRecords,
}

impl Store {
    pub fn new() -> Result<Self> {
        Ok(Store {
            employees: Employees::new()?,
            attendance: AttendanceRecords::new()?,
        })
    }
}

impl AttendanceSource for Store {
    fn employees(&mut self) -> Fetch<Vec<Employee>> {
        Fetch::from_result(self.employees.list())
    }

    fn records(&mut self, month: NaiveDate) -> Fetch<Vec<AttendanceRecord>> {
        Fetch::from_result(self.attendance.fetch_month(month))
    }
}

impl AttendanceSink for Store {
    fn save(&mut self, records: &[AttendanceRecord]) -> Result<usize> {
        self.attendance.save_all(records)
    }
}
