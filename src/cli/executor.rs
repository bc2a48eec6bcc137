use anyhow::{Context, Result};

use crate::cli::commands;
use crate::cli::{CliArgs, CliSubCommands};
use crate::config::AppConfig;

/// Execute CLI command based on the subcommand
pub async fn execute_cli_command(args: &CliArgs, config: AppConfig) -> Result<()> {
    let command = args.command.as_ref().context("No CLI command provided")?;

    match command {
        CliSubCommands::Show { json } => {
            commands::show_profile(config, *json).context("Failed to execute show command")?;
        }
        CliSubCommands::Reset => {
            commands::reset_profile(config).context("Failed to execute reset command")?;
        }
    }
    Ok(())
}
