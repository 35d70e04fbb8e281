use crate::libs::{
    config::Config,
    messages::Message,
    service::PayrollService,
    storage::{Backend, StorageMode},
    view::View,
};
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct RangeArgs {
    #[arg(help = "Range start (YYYY-MM-DD), inclusive")]
    start: NaiveDate,
    #[arg(help = "Range end (YYYY-MM-DD), inclusive")]
    end: NaiveDate,
    #[arg(long, value_enum, help = "Storage backend override")]
    mode: Option<StorageMode>,
}

pub fn cmd(args: RangeArgs) -> Result<()> {
    let config = Config::read()?;
    let mut service = PayrollService::new(Backend::from_config(&config, args.mode)?);

    let employees = service.employees_in_date_range(args.start, args.end)?;
    if employees.is_empty() {
        msg_info!(Message::NoEmployeesInRange(args.start.to_string(), args.end.to_string()));
        return Ok(());
    }
    View::employees(&employees);
    msg_success!(Message::EmployeesInRange(employees.len(), args.start.to_string(), args.end.to_string()));
    Ok(())
}
