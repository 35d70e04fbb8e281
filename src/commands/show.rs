use crate::libs::{config::Config, flat_file::FlatFile, messages::Message};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {}

/// Diagnostic dump of the flat-file store: raw contents followed by the
/// number of lines that parse cleanly.
pub fn cmd(_args: ShowArgs) -> Result<()> {
    let config = Config::read()?;
    let file = FlatFile::new(config.file_path()?);

    msg_print!(Message::FileContentsHeader(file.path().display().to_string()), true);
    file.print()?;
    msg_info!(Message::FileRecordCount(file.count()?));
    Ok(())
}
