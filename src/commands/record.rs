use super::validation_failed;
use crate::{
    db::{holidays::Holidays, store::Store},
    libs::{
        config::Config,
        entry::AttendanceEntry,
        messages::Message,
        source::{AttendanceSink, AttendanceSource},
        time,
        working_hours::WorkingHoursCalculator,
    },
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Employee id
    #[arg(short, long)]
    employee: Option<i64>,
    /// Date as DD-MM-YYYY, defaults to today
    #[arg(short, long)]
    date: Option<String>,
    /// Check-in time as HH:MM
    #[arg(short, long = "in")]
    in_time: String,
    /// Check-out time as HH:MM
    #[arg(short, long = "out")]
    out_time: String,
}

pub fn cmd(args: RecordArgs) -> Result<()> {
    let entry = AttendanceEntry {
        employee_id: args.employee,
        date: args
            .date
            .unwrap_or_else(|| time::format_form_date(&Local::now().date_naive())),
        in_time: args.in_time,
        out_time: args.out_time,
    };

    let mut store = Store::new()?;
    let employees = store.employees().ready()?;
    let calculator = WorkingHoursCalculator::from_rules(&Config::read()?.rules())?;

    let record = entry.build(&employees, &calculator).map_err(validation_failed)?;

    if record.is_sunday {
        msg_info!(Message::SundayDetected);
    }
    if let Some(holiday) = Holidays::new()?.fetch(record.date)? {
        msg_info!(Message::HolidayDetected(holiday.name));
    }

    store
        .save(std::slice::from_ref(&record))
        .map_err(|e| msg_error_anyhow!(Message::AttendanceRecordFailed(e.to_string())))?;

    let name = employees
        .iter()
        .find(|e| e.id == record.employee_id)
        .map(|e| e.name.clone())
        .unwrap_or_default();
    msg_success!(Message::AttendanceRecorded(name, time::format_form_date(&record.date)));
    Ok(())
}
