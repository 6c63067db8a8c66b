use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write the default configuration without prompting
    #[arg(short, long)]
    defaults: bool,
}

/// Writes `config.json` to the data directory.
///
/// # Arguments
///
/// * `init_args` - `--defaults` skips the interactive wizard
///
/// # Returns
///
/// `Ok(())` once the file is saved; prompt and I/O errors are propagated.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.defaults { Config::default() } else { Config::init()? };

    let path = config.save()?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(())
}
