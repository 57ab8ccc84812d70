//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod init;
pub mod login;
pub mod logout;
pub mod search;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// talentscout CLI - companion for the HLG candidate search platform
#[derive(Parser, Debug)]
#[command(name = "talentscout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "TALENTSCOUT_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "TALENTSCOUT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "TALENTSCOUT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize talentscout configuration
    Init,

    /// Sign in against the configured login endpoint
    Login {
        /// Username or email (prompted when omitted)
        #[arg(long)]
        username: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, env = "TALENTSCOUT_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Drop the current session
    Logout,

    /// Show configuration and session status
    Status,

    /// Search candidates
    Search {
        /// Search query text
        query: Option<String>,

        /// Page to fetch (1-based)
        #[arg(long, short = 'p')]
        page: Option<u32>,

        /// Restore a shared view from its query string, e.g. "q=golang&page=2"
        #[arg(long, conflicts_with_all = ["query", "page"])]
        url: Option<String>,

        /// Page through results interactively after the first fetch
        #[arg(long, short = 'i')]
        interactive: bool,
    },

    /// Display version information
    Version,
}
