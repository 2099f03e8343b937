//! Implementation of the `better-papers init` command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::cli::display::{action_success, output, CommandOutput};
use crate::infrastructure::config::{write_default_config, DEFAULT_CONFIG_FILE};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long, short)]
    pub force: bool,

    /// Where to write the config file
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub config_path: PathBuf,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        if self.success {
            action_success(&self.message)
        } else {
            self.message.clone()
        }
    }
}

pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let written = write_default_config(&args.path, args.force)?;

    let message = match (written, args.force) {
        (false, _) => format!(
            "{} already exists. Use --force to overwrite.",
            args.path.display()
        ),
        (true, true) => format!("Rewrote {}", args.path.display()),
        (true, false) => format!("Wrote {}", args.path.display()),
    };

    output(
        &InitOutput {
            success: written,
            message,
            config_path: args.path,
        },
        json_mode,
    );
    Ok(())
}
