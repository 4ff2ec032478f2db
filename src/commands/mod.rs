pub mod bulk;
pub mod dashboard;
pub mod employee;
pub mod export;
pub mod holiday;
pub mod init;
pub mod record;
pub mod records;
pub mod summary;

use crate::libs::{
    messages::Message,
    time,
    validation::{ValidationError, ValidationErrors},
};
use crate::{msg_error, msg_error_anyhow};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure attendance rules")]
    Init(init::InitArgs),
    #[command(about = "Register, list and inspect employees", arg_required_else_help = true)]
    Employee(employee::EmployeeArgs),
    #[command(about = "Record attendance for one employee")]
    Record(record::RecordArgs),
    #[command(about = "Record attendance for many employees at once")]
    Bulk(bulk::BulkArgs),
    #[command(about = "Show attendance records for a date")]
    Records(records::RecordsArgs),
    #[command(about = "Monthly attendance summary per employee")]
    Summary(summary::SummaryArgs),
    #[command(about = "Organization and department statistics")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "Manage holidays", arg_required_else_help = true)]
    Holiday(holiday::HolidayArgs),
    #[command(about = "Export attendance data")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Employee(args) => employee::cmd(args),
            Commands::Record(args) => record::cmd(args),
            Commands::Bulk(args) => bulk::cmd(args),
            Commands::Records(args) => records::cmd(args),
            Commands::Summary(args) => summary::cmd(args),
            Commands::Dashboard(args) => dashboard::cmd(args),
            Commands::Holiday(args) => holiday::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Parses `today` or a `DD-MM-YYYY` date argument.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str == "today" {
        return Ok(Local::now().date_naive());
    }
    time::parse_form_date(date_str).ok_or_else(|| {
        msg_error_anyhow!(ValidationError::InvalidDate { field: "date" })
    })
}

/// Parses `current` or a `MM-YYYY` month argument into the first day of the
/// month.
pub(crate) fn parse_month(month_str: &str) -> Result<NaiveDate> {
    if month_str == "current" {
        return Ok(time::month_start(&Local::now().date_naive()));
    }
    time::parse_form_date(&format!("01-{}", month_str.trim())).ok_or_else(|| {
        msg_error_anyhow!(ValidationError::InvalidDate { field: "month" })
    })
}

/// Prints every field error and turns the list into a single failure.
pub(crate) fn validation_failed(errors: ValidationErrors) -> anyhow::Error {
    for error in errors.errors() {
        msg_error!(error);
    }
    msg_error_anyhow!(Message::ValidationFailed)
}
