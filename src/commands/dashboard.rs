use super::{parse_date, parse_month};
use crate::{
    db::{attendance::AttendanceRecords, store::Store},
    libs::{
        dashboard::{department_summaries, DashboardStats},
        messages::Message,
        source::AttendanceSource,
        time,
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Month for the overall statistics, as MM-YYYY
    #[arg(short, long, default_value = "current")]
    month: String,
    /// Day for the department breakdown, as DD-MM-YYYY or "today"
    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd(args: DashboardArgs) -> Result<()> {
    let month = parse_month(&args.month)?;
    let day = parse_date(&args.date)?;

    let mut store = Store::new()?;
    let employees = store.employees().ready()?;
    let records = store.records(month).ready()?;

    let stats = DashboardStats::collect(&employees, &records, time::days_in_month(&month));
    msg_print!(Message::DashboardHeader(month.format("%B, %Y").to_string()), true);
    View::dashboard(&stats)?;

    let day_records = AttendanceRecords::new()?.fetch_day(day)?;
    msg_print!(Message::DepartmentsHeader(time::format_form_date(&day)), true);
    View::departments(&department_summaries(&employees, &day_records, &day))?;
    Ok(())
}
