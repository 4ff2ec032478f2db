//! Bulk attendance for one date.
//!
//! Every employee starts selected and present with their shift times. Flags
//! adjust individual rows before the records are written:
//!
//! ```bash
//! rollcall bulk --date 02-06-2025 --absent 4,9 --leave 12 \
//!     --time 3=09:10-17:40 --department Ops
//! ```

use super::{employee::FilterArgs, validation_failed};
use crate::{
    db::{holidays::Holidays, store::Store},
    libs::{
        attendance::AttendanceStatus,
        bulk::{BulkAttendance, TimeField},
        config::Config,
        employee::{EmployeeFilter, EmployeeId},
        messages::Message,
        source::{AttendanceSink, AttendanceSource},
        time,
        validation::ValidationError,
        view::View,
        working_hours::WorkingHoursCalculator,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// `ID=HH:MM-HH:MM` replacement of one row's check-in and check-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOverride {
    pub employee_id: EmployeeId,
    pub in_time: String,
    pub out_time: String,
}

pub fn parse_time_override(value: &str) -> Result<TimeOverride, String> {
    let invalid = || Message::InvalidTimeOverride(value.to_string()).to_string();

    let (id, times) = value.split_once('=').ok_or_else(invalid)?;
    let (in_time, out_time) = times.split_once('-').ok_or_else(invalid)?;
    let employee_id = id.trim().parse::<EmployeeId>().map_err(|_| invalid())?;

    Ok(TimeOverride {
        employee_id,
        in_time: in_time.trim().to_string(),
        out_time: out_time.trim().to_string(),
    })
}

#[derive(Debug, Args)]
pub struct BulkArgs {
    /// Date as DD-MM-YYYY, defaults to today
    #[arg(long)]
    date: Option<String>,
    /// Employees to mark absent
    #[arg(long, value_delimiter = ',')]
    absent: Vec<EmployeeId>,
    /// Employees to mark on leave
    #[arg(long, value_delimiter = ',')]
    leave: Vec<EmployeeId>,
    /// Employees to leave out of this submission
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<EmployeeId>,
    /// Time override as ID=HH:MM-HH:MM, may be repeated
    #[arg(long = "time", value_parser = parse_time_override)]
    times: Vec<TimeOverride>,
    #[command(flatten)]
    filter: FilterArgs,
    /// Submit without asking for confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: BulkArgs) -> Result<()> {
    let date = args
        .date
        .unwrap_or_else(|| time::format_form_date(&Local::now().date_naive()));

    let mut store = Store::new()?;
    let employees = store.employees().ready()?;

    let mut bulk = BulkAttendance::new(&date);
    bulk.load(&employees).map_err(validation_failed)?;

    if let Some(day) = bulk.day() {
        if bulk.is_sunday() {
            msg_info!(Message::SundayDetected);
        }
        if let Some(holiday) = Holidays::new()?.fetch(day)? {
            msg_info!(Message::HolidayDetected(holiday.name));
        }
    }

    bulk.set_filter(EmployeeFilter::from(args.filter));
    bulk.deselect_hidden();

    for &id in &args.exclude {
        bulk.set_selected(id, false).map_err(row_error)?;
    }
    for &id in &args.absent {
        bulk.set_attendance(id, AttendanceStatus::Absent).map_err(row_error)?;
    }
    for &id in &args.leave {
        bulk.set_attendance(id, AttendanceStatus::Leave).map_err(row_error)?;
    }
    for time_override in &args.times {
        bulk.set_time(time_override.employee_id, TimeField::In, &time_override.in_time)
            .map_err(validation_failed)?;
        bulk.set_time(time_override.employee_id, TimeField::Out, &time_override.out_time)
            .map_err(validation_failed)?;
    }

    let visible = bulk.visible();
    msg_print!(Message::AttendanceForDate(date.clone()), true);
    View::bulk_rows(&visible)?;
    msg_info!(Message::BulkSelection(bulk.selected_count(), visible.len()));

    if bulk.selected_count() == 0 {
        msg_bail_anyhow!(Message::NoEmployeesSelected);
    }

    if !args.yes
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Submit attendance?")
            .default(true)
            .interact()?
    {
        return Ok(());
    }

    let calculator = WorkingHoursCalculator::from_rules(&Config::read()?.rules())?;
    let records = bulk.submit(&calculator).map_err(validation_failed)?;
    let saved = store
        .save(&records)
        .map_err(|e| msg_error_anyhow!(Message::AttendanceRecordFailed(e.to_string())))?;

    msg_success!(Message::BulkAttendanceRecorded(saved, date));
    Ok(())
}

fn row_error(error: ValidationError) -> anyhow::Error {
    match error {
        ValidationError::UnknownEmployee(id) => msg_error_anyhow!(Message::BulkRowUnknown(id)),
        other => msg_error_anyhow!(other),
    }
}
