use crate::libs::{
    config::Config,
    messages::Message,
    service::PayrollService,
    storage::{Backend, StorageMode},
};
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SyncArgs {
    #[arg(help = "Employee name")]
    name: String,
    #[arg(long, value_enum, help = "Storage backend override")]
    mode: Option<StorageMode>,
}

pub fn cmd(args: SyncArgs) -> Result<()> {
    let config = Config::read()?;
    let mut service = PayrollService::new(Backend::from_config(&config, args.mode)?);

    service.load()?;
    if service.is_synced_with_backend(&args.name)? {
        msg_success!(Message::RosterInSync(args.name));
    } else {
        msg_warning!(Message::RosterOutOfSync(args.name));
    }
    Ok(())
}
