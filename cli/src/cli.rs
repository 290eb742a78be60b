use clap::{Parser, Subcommand};

const EXAMPLES: &str = "\
Examples:
  nvim-theme set tokyonight    Change to tokyonight theme
  nvim-theme get               Show current theme
  nvim-theme list              List available themes
  nvim-theme status            Check server status";

/// Control Neovim themes from the command line
#[derive(Parser, Debug)]
#[command(name = "nvim-theme", author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Change to specified theme
    Set {
        /// Theme name to switch to
        theme: String,
    },
    /// Get current theme name
    Get,
    /// List available themes
    List,
    /// Reload Neovim configuration
    Reload,
    /// Check server status
    Status,
}
