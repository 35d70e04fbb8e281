use crate::libs::{
    config::Config,
    messages::Message,
    service::PayrollService,
    storage::{Backend, StorageMode},
    view::View,
};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AvgArgs {
    #[arg(long, value_enum, help = "Storage backend override")]
    mode: Option<StorageMode>,
}

pub fn cmd(args: AvgArgs) -> Result<()> {
    let config = Config::read()?;
    let mut service = PayrollService::new(Backend::from_config(&config, args.mode)?);

    let averages = service.average_salary_by_gender()?;
    if averages.is_empty() {
        msg_info!(Message::NoGenderData);
        return Ok(());
    }
    msg_print!(Message::AverageSalaryHeader, true);
    View::averages(&averages);
    Ok(())
}
