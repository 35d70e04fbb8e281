pub mod add;
pub mod avg;
pub mod init;
pub mod load;
pub mod range;
pub mod show;
pub mod sync;
pub mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add an employee record")]
    Add(add::AddArgs),
    #[command(about = "Load and display the payroll roster")]
    Load(load::LoadArgs),
    #[command(about = "Update an employee's salary", arg_required_else_help = true)]
    Update(update::UpdateArgs),
    #[command(about = "Check whether the roster copy matches the backend", arg_required_else_help = true)]
    Sync(sync::SyncArgs),
    #[command(about = "List employees who started within a date range", arg_required_else_help = true)]
    Range(range::RangeArgs),
    #[command(about = "Average salary grouped by gender")]
    Avg(avg::AvgArgs),
    #[command(about = "Print the raw payroll file contents")]
    Show(show::ShowArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Load(args) => load::cmd(args),
            Commands::Update(args) => update::cmd(args),
            Commands::Sync(args) => sync::cmd(args),
            Commands::Range(args) => range::cmd(args),
            Commands::Avg(args) => avg::cmd(args),
            Commands::Show(args) => show::cmd(args),
        }
    }
}
