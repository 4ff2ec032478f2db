//! Data export command.
//!
//! ```bash
//! rollcall export summary --format excel --month 06-2025
//! rollcall export records --format csv --output june.csv
//! ```

use super::parse_month;
use crate::{
    db::store::Store,
    libs::{
        config::Config,
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        source::AttendanceSource,
        summary::SummaryRules,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Data set to export
    #[arg(value_enum, default_value = "summary")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file, defaults to rollcall_export_<timestamp>.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Month as MM-YYYY
    #[arg(short, long, default_value = "current")]
    month: String,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let month = parse_month(&args.month)?;

    msg_info!(Message::ExportingData(format!("{:?}", args.data), format!("{:?}", args.format)));

    let mut store = Store::new()?;
    let employees = store.employees().ready()?;
    let records = store.records(month).ready()?;
    let rules = SummaryRules::from_rules(&Config::read()?.rules())?;

    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(args.data, month, &employees, &records, &rules)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
