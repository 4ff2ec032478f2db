//! Employee registry commands.
//!
//! ```bash
//! rollcall employee register --name "Asha Rao" --department Ops \
//!     --doj 02-01-2024 --hours 08:30 --shift-start 08:00 --shift-end 16:30
//! rollcall employee list --department Ops --search asha
//! rollcall employee show 3 --month 06-2025
//! ```

use super::{parse_month, validation_failed};
use crate::{
    db::{attendance::AttendanceRecords, employees::Employees},
    libs::{
        config::Config,
        employee::{EmployeeFilter, EmployeeRegistration, EmploymentStatus},
        messages::Message,
        summary::SummaryRules,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
enum EmployeeCommand {
    /// Register a new employee
    Register(RegisterArgs),
    /// List employees, optionally filtered
    List(FilterArgs),
    /// Show an employee with their attendance summary for a month
    Show {
        id: i64,
        /// Month as MM-YYYY
        #[arg(short, long, default_value = "current")]
        month: String,
    },
}

#[derive(Debug, Args)]
struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    department: String,
    #[arg(long, value_enum, default_value = "payrolled")]
    status: EmploymentStatus,
    /// Date of joining as DD-MM-YYYY
    #[arg(long)]
    doj: String,
    /// Allocated daily hours as HH:MM
    #[arg(long)]
    hours: String,
    /// Shift start as HH:MM
    #[arg(long)]
    shift_start: String,
    /// Shift end as HH:MM
    #[arg(long)]
    shift_end: String,
}

/// Roster filter flags shared by the listing commands.
#[derive(Debug, Args, Clone, Default)]
pub struct FilterArgs {
    #[arg(short, long)]
    pub department: Option<String>,
    #[arg(short, long, value_enum)]
    pub status: Option<EmploymentStatus>,
    /// Case-insensitive match on name or department
    #[arg(long)]
    pub search: Option<String>,
}

impl From<FilterArgs> for EmployeeFilter {
    fn from(args: FilterArgs) -> Self {
        EmployeeFilter {
            department: args.department,
            status: args.status,
            search: args.search,
        }
    }
}

pub fn cmd(args: EmployeeArgs) -> Result<()> {
    match args.command {
        EmployeeCommand::Register(register) => {
            let registration = EmployeeRegistration {
                name: register.name,
                department: register.department,
                status: register.status,
                date_of_joining: register.doj,
                allocated_hours: register.hours,
                shift_start: register.shift_start,
                shift_end: register.shift_end,
            };
            let new_employee = registration.validate().map_err(validation_failed)?;
            let employee = Employees::new()?.insert(&new_employee)?;
            msg_success!(Message::EmployeeRegistered(employee.name, employee.id));
        }
        EmployeeCommand::List(filter) => {
            let employees = Employees::new()?.list()?;
            let filter = EmployeeFilter::from(filter);
            let matching: Vec<_> = filter.apply(&employees).into_iter().cloned().collect();
            if matching.is_empty() {
                msg_info!(Message::NoEmployees);
                return Ok(());
            }
            msg_print!(Message::EmployeesHeader, true);
            View::employees(&matching)?;
        }
        EmployeeCommand::Show { id, month } => {
            let month = parse_month(&month)?;
            let employee = Employees::new()?.get(id)?;
            let records = AttendanceRecords::new()?.fetch_month(month)?;
            let rules = SummaryRules::from_rules(&Config::read()?.rules())?;

            msg_print!(Message::EmployeeDetailsHeader(employee.name.clone()), true);
            View::employee_card(&employee, &rules.summarize(&records, employee.id))?;
        }
    }
    Ok(())
}
