//! Bulk attendance for one date across the roster.
//!
//! The roster is loaded into a single list of [`BulkRow`]s. Filtering by
//! department, status or search only changes what [`BulkAttendance::visible`]
//! returns; edits always go to the one list, so a row edited while filtered
//! out of view keeps its changes.
//!
//! ```rust
//! use rollcall::libs::bulk::BulkAttendance;
//! use rollcall::libs::working_hours::WorkingHoursCalculator;
//!
//! let mut bulk = BulkAttendance::new("02-06-2025");
//! bulk.load(&[]).unwrap();
//! // Nothing loaded means nothing selected.
//! assert!(bulk.submit(&WorkingHoursCalculator::default()).is_err());
//! ```

use chrono::{Duration, NaiveDate, NaiveTime};

use super::{
    attendance::{AttendanceRecord, AttendanceStatus},
    employee::{Employee, EmployeeFilter, EmployeeId, EmploymentStatus},
    time,
    validation::{clock_field, date_field, ValidationError, ValidationErrors},
    working_hours::WorkingHoursCalculator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    In,
    Out,
}

impl TimeField {
    fn name(&self) -> &'static str {
        match self {
            TimeField::In => "inTime",
            TimeField::Out => "outTime",
        }
    }
}

/// One employee's line in the bulk form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkRow {
    pub employee_id: EmployeeId,
    pub name: String,
    pub department: String,
    pub status: EmploymentStatus,
    pub allocated_hours: Option<Duration>,
    pub shift_start: Option<NaiveTime>,
    pub shift_end: Option<NaiveTime>,
    pub selected: bool,
    pub in_time: Option<NaiveTime>,
    pub out_time: Option<NaiveTime>,
    pub attendance: AttendanceStatus,
}

impl BulkRow {
    fn from_employee(employee: &Employee, is_sunday: bool) -> Self {
        let (in_time, out_time) = if is_sunday {
            (None, None)
        } else {
            (employee.shift_start, employee.shift_end)
        };
        Self {
            employee_id: employee.id,
            name: employee.name.clone(),
            department: employee.department.clone(),
            status: employee.status,
            allocated_hours: employee.allocated_hours,
            shift_start: employee.shift_start,
            shift_end: employee.shift_end,
            selected: true,
            in_time,
            out_time,
            attendance: AttendanceStatus::Present,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BulkAttendance {
    date: String,
    day: Option<NaiveDate>,
    rows: Vec<BulkRow>,
    filter: EmployeeFilter,
}

impl BulkAttendance {
    pub fn new(date: &str) -> Self {
        Self {
            date: date.to_string(),
            ..Default::default()
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// The parsed date, once a roster has been loaded.
    pub fn day(&self) -> Option<NaiveDate> {
        self.day
    }

    /// Changes the date. Loaded rows are discarded and must be loaded again.
    pub fn set_date(&mut self, date: &str) {
        self.date = date.to_string();
        self.day = None;
        self.rows.clear();
    }

    /// Loads one row per employee for the current date.
    ///
    /// Every row starts selected and present. On a Sunday the times start
    /// empty, otherwise they default to the employee's shift.
    pub fn load(&mut self, employees: &[Employee]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let day = match date_field(&mut errors, "date", &self.date) {
            Some(day) => day,
            None => return Err(errors),
        };
        let is_sunday = time::is_sunday(&day);

        self.day = Some(day);
        self.rows = employees.iter().map(|e| BulkRow::from_employee(e, is_sunday)).collect();
        Ok(())
    }

    pub fn is_sunday(&self) -> bool {
        self.day.as_ref().map_or(false, time::is_sunday)
    }

    pub fn rows(&self) -> &[BulkRow] {
        &self.rows
    }

    pub fn row(&self, employee_id: EmployeeId) -> Option<&BulkRow> {
        self.rows.iter().find(|r| r.employee_id == employee_id)
    }

    fn row_mut(&mut self, employee_id: EmployeeId) -> Result<&mut BulkRow, ValidationError> {
        self.rows
            .iter_mut()
            .find(|r| r.employee_id == employee_id)
            .ok_or(ValidationError::UnknownEmployee(employee_id))
    }

    pub fn filter(&self) -> &EmployeeFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: EmployeeFilter) {
        self.filter = filter;
    }

    /// Rows matching the current filter, in roster order.
    pub fn visible(&self) -> Vec<&BulkRow> {
        self.rows
            .iter()
            .filter(|r| self.filter.matches_fields(&r.name, &r.department, r.status))
            .collect()
    }

    pub fn toggle_selected(&mut self, employee_id: EmployeeId) -> Result<bool, ValidationError> {
        let row = self.row_mut(employee_id)?;
        row.selected = !row.selected;
        Ok(row.selected)
    }

    pub fn set_selected(&mut self, employee_id: EmployeeId, selected: bool) -> Result<(), ValidationError> {
        self.row_mut(employee_id)?.selected = selected;
        Ok(())
    }

    /// Selects or deselects every visible row.
    pub fn set_all_visible(&mut self, selected: bool) {
        let filter = self.filter.clone();
        for row in self
            .rows
            .iter_mut()
            .filter(|r| filter.matches_fields(&r.name, &r.department, r.status))
        {
            row.selected = selected;
        }
    }

    /// Deselects every row hidden by the current filter, so a filtered
    /// submission only records what is visible.
    pub fn deselect_hidden(&mut self) {
        if self.filter.is_empty() {
            return;
        }
        let filter = self.filter.clone();
        for row in self
            .rows
            .iter_mut()
            .filter(|r| !filter.matches_fields(&r.name, &r.department, r.status))
        {
            row.selected = false;
        }
    }

    pub fn set_attendance(&mut self, employee_id: EmployeeId, attendance: AttendanceStatus) -> Result<(), ValidationError> {
        self.row_mut(employee_id)?.attendance = attendance;
        Ok(())
    }

    /// Sets a row's check-in or check-out time. An empty value clears it.
    pub fn set_time(&mut self, employee_id: EmployeeId, field: TimeField, value: &str) -> Result<(), ValidationErrors> {
        let parsed = if value.trim().is_empty() {
            None
        } else {
            let mut errors = ValidationErrors::new();
            match clock_field(&mut errors, field.name(), value) {
                Some(parsed) => Some(parsed),
                None => return Err(errors),
            }
        };

        let row = self.row_mut(employee_id)?;
        match field {
            TimeField::In => row.in_time = parsed,
            TimeField::Out => row.out_time = parsed,
        }
        Ok(())
    }

    pub fn selected_count(&self) -> usize {
        self.rows.iter().filter(|r| r.selected).count()
    }

    /// Builds one record per selected row.
    ///
    /// Absent and leave rows get no times and zero hours. Present rows are
    /// credited through `calculator`. Sunday records never carry times.
    pub fn submit(&self, calculator: &WorkingHoursCalculator) -> Result<Vec<AttendanceRecord>, ValidationErrors> {
        let day = match self.day {
            Some(day) => day,
            None => return Err(ValidationError::InvalidDate { field: "date" }.into()),
        };
        if self.selected_count() == 0 {
            return Err(ValidationError::NoEmployeesSelected.into());
        }
        let is_sunday = time::is_sunday(&day);

        let records = self
            .rows
            .iter()
            .filter(|r| r.selected)
            .map(|row| {
                let mut record = AttendanceRecord::new(row.employee_id, day);
                record.status = row.attendance;
                if record.is_present() {
                    record.working_hours =
                        calculator.compute(row.in_time, row.out_time, row.allocated_hours, is_sunday);
                    if !is_sunday {
                        record.in_time = row.in_time;
                        record.out_time = row.out_time;
                    }
                }
                record
            })
            .collect::<Vec<_>>();

        tracing::debug!(date = %time::day_key(&day), count = records.len(), "built bulk attendance");
        Ok(records)
    }
}
