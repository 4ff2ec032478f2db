use super::{parse_date, validation_failed};
use crate::{
    db::holidays::Holidays,
    libs::{holiday::HolidayInput, messages::Message, time, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct HolidayArgs {
    #[command(subcommand)]
    command: HolidayCommand,
}

#[derive(Debug, Subcommand)]
enum HolidayCommand {
    /// Add a holiday, or rename the one already on that date
    Add {
        /// Date as DD-MM-YYYY
        date: String,
        name: String,
    },
    /// List holidays in date order
    List,
    /// Remove the holiday on a date
    Remove {
        /// Date as DD-MM-YYYY
        date: String,
    },
}

pub fn cmd(args: HolidayArgs) -> Result<()> {
    let mut holidays = Holidays::new()?;

    match args.command {
        HolidayCommand::Add { date, name } => {
            let holiday = HolidayInput { date, name }.validate().map_err(validation_failed)?;
            holidays.insert(&holiday)?;
            msg_success!(Message::HolidayAdded(holiday.name, time::format_form_date(&holiday.date)));
        }
        HolidayCommand::List => {
            let list = holidays.list()?;
            if list.is_empty() {
                msg_info!(Message::NoHolidays);
                return Ok(());
            }
            msg_print!(Message::HolidaysHeader, true);
            View::holidays(&list)?;
        }
        HolidayCommand::Remove { date } => {
            let date = parse_date(&date)?;
            holidays.delete(date)?;
            msg_success!(Message::HolidayRemoved(time::format_form_date(&date)));
        }
    }
    Ok(())
}
