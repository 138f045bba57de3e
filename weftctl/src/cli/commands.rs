//! CLI command and argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Weft remote control CLI
#[derive(Parser, Debug)]
#[command(name = "weftctl")]
#[command(version, about = "Remote control for a running weft terminal", long_about = None)]
pub struct Cli {
    /// Control socket path (overrides config file)
    #[arg(short, long)]
    pub socket: Option<PathBuf>,

    /// Enable verbose logging (overrides config file)
    #[arg(short, long)]
    pub verbose: Option<bool>,

    /// Don't load config file
    #[arg(long)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set terminal colors in the specified windows/tabs
    SetColors(SetColorsArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments for the `set-colors` command.
///
/// Colors can be given as individual `name=value` assignments or as paths
/// to files in the weft.conf color syntax, for example:
///
/// ```text
/// weftctl set-colors foreground=red background=white
/// weftctl set-colors ~/.config/weft/themes/night.conf
/// ```
#[derive(Args, Debug, Default)]
pub struct SetColorsArgs {
    /// Color assignments (name=value) or paths to color config files
    #[arg(value_name = "COLOR_OR_FILE")]
    pub colors: Vec<String>,

    /// Change colors in all windows, not just the active one
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Also change the configured colors used for new windows
    #[arg(short = 'c', long)]
    pub configured: bool,

    /// Restore all colors to their startup values.
    ///
    /// Any color arguments are ignored; --all and --configured are implied.
    #[arg(long)]
    pub reset: bool,

    /// Window to change colors in (e.g. "id:2", "title:logs", "all")
    #[arg(short = 'm', long = "match")]
    pub match_window: Option<String>,

    /// Tab to change colors in
    #[arg(short = 't', long = "match-tab")]
    pub match_tab: Option<String>,
}
