use clap::{Parser, Subcommand, builder::Styles};

/// Styles for clap output
const STYLES: Styles = Styles::styled()
    .header(clap::builder::styling::AnsiColor::Green.on_default().bold())
    .usage(clap::builder::styling::AnsiColor::Green.on_default().bold())
    .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(clap::builder::styling::AnsiColor::Yellow.on_default());

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "rebind")]
#[command(author, version, about)]
#[command(styles = STYLES)]
#[command(
    long_about = "A TUI/CLI editor for remapping keyboard and gamepad inputs written in Rust.\n\n\
    By default (without subcommands), launches the interactive editor.\n\
    Use specified subcommands for non-interactive CLI output."
)]
#[command(after_long_help = "Examples:\n  \
    rebind [PROFILE]                  # Edit the profile interactively\n  \
    rebind show [PROFILE]             # Print the stored profile (CLI)\n  \
    rebind show --json [PROFILE]      # Print the stored profile as JSON (CLI)\n  \
    rebind reset [PROFILE]            # Rewrite the profile with built-in defaults")]
pub struct CliArgs {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<CliSubCommands>,

    /// Profile file to edit (default: platform config directory)
    #[arg(global = true, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Configuration file to load
    #[arg(
        global = true,
        short,
        long,
        value_name = "FILE",
        help_heading = "Configuration"
    )]
    pub config: Option<String>,

    /// Theme to use for TUI
    #[arg(
        global = true,
        long,
        value_name = "THEME",
        help_heading = "Configuration"
    )]
    pub theme: Option<String>,

    /// Print current configuration and exit
    #[arg(global = true, long, help_heading = "Configuration")]
    pub print_config: bool,
}

/// Subcommands and their arguments
#[derive(Subcommand, Debug)]
pub enum CliSubCommands {
    /// Print the stored input profile (non-interactive output)
    Show {
        /// Output as JSON format
        #[arg(long)]
        json: bool,
    },

    /// Rewrite the profile file with the built-in defaults
    Reset,
}
