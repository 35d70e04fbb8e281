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
pub struct UpdateArgs {
    #[arg(help = "Employee name")]
    name: String,
    #[arg(help = "New salary")]
    salary: f64,
    #[arg(long, value_enum, help = "Storage backend override")]
    mode: Option<StorageMode>,
}

/// Updates the named employee's salary and immediately verifies that the
/// roster copy agrees with what the backend now holds.
pub fn cmd(args: UpdateArgs) -> Result<()> {
    let config = Config::read()?;
    let mut service = PayrollService::new(Backend::from_config(&config, args.mode)?);

    service.load()?;
    service.update_salary(&args.name, args.salary)?;
    msg_success!(Message::SalaryUpdated(args.name.clone(), args.salary));

    if service.is_synced_with_backend(&args.name)? {
        msg_success!(Message::RosterInSync(args.name));
    } else {
        msg_warning!(Message::RosterOutOfSync(args.name));
    }
    Ok(())
}
