use crate::libs::{
    config::Config,
    messages::Message,
    service::PayrollService,
    storage::{Backend, StorageMode},
    view::View,
};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LoadArgs {
    #[arg(long, value_enum, help = "Storage backend override")]
    mode: Option<StorageMode>,
}

pub fn cmd(args: LoadArgs) -> Result<()> {
    let config = Config::read()?;
    let mut service = PayrollService::new(Backend::from_config(&config, args.mode)?);

    let roster = service.load()?;
    if roster.is_empty() {
        msg_info!(Message::RosterEmpty);
        return Ok(());
    }
    View::employees(roster);
    msg_success!(Message::EmployeesLoaded(roster.len()));
    Ok(())
}
