//! Command-line interface definition using clap.

use clap::{Parser, Subcommand, ValueEnum};
use onair_core::EventFilter;
use std::path::PathBuf;

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.1.0 (abc1234, 2026-10-17)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// onAirChat - chat about live and upcoming events
#[derive(Parser, Debug)]
#[command(name = "onair-chat")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to state directory
    #[arg(short, long, env = "ONAIR_STATE_DIR", global = true)]
    pub state_dir: Option<PathBuf>,

    /// JSON file with the event directory (built-in demo events if omitted)
    #[arg(short, long, env = "ONAIR_EVENTS_FILE", global = true)]
    pub events: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive chat screen (default)
    Tui,

    /// Print the event directory
    Events {
        /// Only events whose name contains this text (case-insensitive)
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Live status filter (all, live, upcoming)
        #[arg(short, long, default_value = "all")]
        filter: EventFilter,

        /// Output format (table, json, brief)
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
}

/// Output format for the events command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Brief,
}

impl Cli {
    /// Returns the state directory path, using the configured default if not specified.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(onair_core::state_dir)
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Returns true if the chat screen will take over the terminal.
    pub fn is_tui(&self) -> bool {
        matches!(self.command, None | Some(Commands::Tui))
    }
}
