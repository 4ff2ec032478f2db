use super::parse_date;
use crate::{
    db::{attendance::AttendanceRecords, employees::Employees},
    libs::{messages::Message, time, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RecordsArgs {
    /// Date as DD-MM-YYYY or "today"
    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd(args: RecordsArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let records = AttendanceRecords::new()?.fetch_day(date)?;
    let date_str = time::format_form_date(&date);

    if records.is_empty() {
        msg_info!(Message::NoRecordsForDate(date_str));
        return Ok(());
    }

    let employees = Employees::new()?.list()?;
    msg_print!(Message::AttendanceForDate(date_str), true);
    View::records(&records, &employees)?;
    Ok(())
}
