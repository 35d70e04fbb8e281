use crate::libs::{
    config::Config,
    employee::Employee,
    flat_file::DATE_FORMAT,
    messages::Message,
    service::PayrollService,
    storage::{Backend, StorageMode},
};
use crate::{msg_success, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long, help = "Employee ID")]
    id: Option<i64>,
    #[arg(long, help = "Employee name")]
    name: Option<String>,
    #[arg(long, help = "Employee salary")]
    salary: Option<f64>,
    #[arg(long, help = "Start date (YYYY-MM-DD)")]
    start_date: Option<NaiveDate>,
    #[arg(long, help = "Single-character gender code")]
    gender: Option<char>,
    #[arg(long, value_enum, help = "Storage backend override")]
    mode: Option<StorageMode>,
}

/// Adds one employee, prompting for any field not given as a flag. Mirrors
/// the interactive console entry the roster has always supported.
pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let theme = ColorfulTheme::default();

    let id = match args.id {
        Some(id) => id,
        None => Input::with_theme(&theme).with_prompt(Message::PromptEmployeeId.to_string()).interact_text()?,
    };
    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&theme).with_prompt(Message::PromptEmployeeName.to_string()).interact_text()?,
    };
    let salary = match args.salary {
        Some(salary) => salary,
        None => Input::with_theme(&theme).with_prompt(Message::PromptEmployeeSalary.to_string()).interact_text()?,
    };
    let start_date = match args.start_date {
        Some(date) => Some(date),
        None => {
            let raw: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptStartDate.to_string())
                .allow_empty(true)
                .interact_text()?;
            if raw.is_empty() {
                None
            } else {
                Some(NaiveDate::parse_from_str(&raw, DATE_FORMAT)?)
            }
        }
    };
    let gender = match args.gender {
        Some(gender) => Some(gender),
        None => {
            let raw: String = Input::with_theme(&theme)
                .with_prompt(Message::PromptGender.to_string())
                .allow_empty(true)
                .interact_text()?;
            raw.chars().next()
        }
    };

    let mode = args.mode.or(config.mode);
    let mut service = PayrollService::new(Backend::from_config(&config, mode)?);
    service.add(Employee {
        id,
        name: name.clone(),
        salary,
        start_date,
        gender,
    })?;

    msg_success!(Message::EmployeeAdded(name));
    if mode == Some(StorageMode::Memory) {
        msg_warning!(Message::MemoryNotPersistent);
    }
    Ok(())
}
