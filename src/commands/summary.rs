use super::parse_month;
use crate::{
    db::store::Store,
    libs::{
        config::Config,
        messages::Message,
        source::AttendanceSource,
        summary::SummaryRules,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Month as MM-YYYY
    #[arg(short, long, default_value = "current")]
    month: String,
}

pub fn cmd(args: SummaryArgs) -> Result<()> {
    let month = parse_month(&args.month)?;

    let mut store = Store::new()?;
    let employees = store.employees().ready()?;
    if employees.is_empty() {
        msg_info!(Message::NoEmployees);
        return Ok(());
    }
    let records = store.records(month).ready()?;
    let rules = SummaryRules::from_rules(&Config::read()?.rules())?;

    msg_print!(Message::SummaryHeader(month.format("%B, %Y").to_string()), true);
    View::summaries(&rules.summarize_all(&employees, &records))?;
    Ok(())
}
