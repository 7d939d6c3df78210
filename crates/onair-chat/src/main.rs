//! onAirChat entry point.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use onair_chat::cli::{Cli, Commands};
use onair_chat::commands;
use onair_chat::tui;
use onair_core::EventDirectory;

fn main() {
    // ./.env.local may set ONAIR_STATE_DIR, so it goes before parsing
    onair_core::load_local_env();
    let cli = Cli::parse();

    // The state-dir file can set ONAIR_EVENTS_FILE, which clap reads
    let cli = if onair_core::load_config_in(&cli.state_dir()) {
        Cli::parse()
    } else {
        cli
    };
    init_tracing(&cli);

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> commands::Result<()> {
    let directory = EventDirectory::load(cli.events.as_deref())?;

    match cli.command {
        Some(Commands::Events { search, filter, format }) => {
            commands::cmd_events(&directory, search.as_deref(), filter, format)
        }
        Some(Commands::Tui) | None => {
            tui::run(directory)?;
            Ok(())
        }
    }
}

/// Initialize tracing.
///
/// The chat screen owns the terminal, so in TUI mode logs go to the log file
/// in the state directory. Other commands log to stderr.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    if !cli.is_tui() {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    match open_log_file(&onair_core::log_file_in(&cli.state_dir())) {
        Ok(file) => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(_) => fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init(),
    }
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
