//! Shared configuration for onAirChat.
//!
//! # Storage Structure
//!
//! ```text
//! ~/.onair-chat/
//! ├── .env.local    # Optional environment overrides (after ./.env.local)
//! └── logs/         # Application logs
//!     └── onair-chat.log
//! ```
//!
//! # Environment Variables
//!
//! - `ONAIR_STATE_DIR`: Override the base state directory
//! - `ONAIR_LOG_DIR`: Override the log directory
//! - `ONAIR_EVENTS_FILE`: JSON file with the event directory (read by the CLI)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Environment variable for custom state directory.
pub const STATE_DIR_ENV: &str = "ONAIR_STATE_DIR";

/// Environment variable for custom log directory.
pub const LOG_DIR_ENV: &str = "ONAIR_LOG_DIR";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".onair-chat";

const LOGS_SUBDIR: &str = "logs";
const LOG_FILE_NAME: &str = "onair-chat.log";

static STATE_DIR_CACHE: OnceLock<PathBuf> = OnceLock::new();

/// Get the onAirChat state directory.
///
/// The state directory is determined by:
/// 1. `ONAIR_STATE_DIR` environment variable if set
/// 2. `~/.onair-chat` if home directory is available
/// 3. `.onair-chat` in current directory as fallback
pub fn state_dir() -> PathBuf {
    STATE_DIR_CACHE
        .get_or_init(|| {
            std::env::var(STATE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    dirs::home_dir()
                        .map(|h| h.join(DEFAULT_STATE_DIR))
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
                })
        })
        .clone()
}

/// Get the logs directory.
///
/// Defaults to `~/.onair-chat/logs/` or `ONAIR_LOG_DIR` env var.
pub fn logs_dir() -> PathBuf {
    logs_dir_in(&state_dir())
}

/// Logs directory for an explicit state directory.
pub fn logs_dir_in(state_dir: &Path) -> PathBuf {
    std::env::var(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| state_dir.join(LOGS_SUBDIR))
}

/// Get the TUI log file path.
pub fn log_file() -> PathBuf {
    log_file_in(&state_dir())
}

/// TUI log file path for an explicit state directory.
pub fn log_file_in(state_dir: &Path) -> PathBuf {
    logs_dir_in(state_dir).join(LOG_FILE_NAME)
}

const ENV_FILE_NAME: &str = ".env.local";

/// Get the `.env.local` path inside the state directory.
pub fn env_file() -> PathBuf {
    env_file_in(&state_dir())
}

/// `.env.local` path for an explicit state directory.
pub fn env_file_in(state_dir: &Path) -> PathBuf {
    state_dir.join(ENV_FILE_NAME)
}

/// Load `./.env.local` from the working directory.
///
/// Call this before the state directory is resolved: the file may set
/// `ONAIR_STATE_DIR`, and [`state_dir`] caches its first answer.
/// Returns true if a file was loaded.
pub fn load_local_env() -> bool {
    dotenvy::from_filename(ENV_FILE_NAME).is_ok()
}

/// Load `<state_dir>/.env.local`.
///
/// Variables already present in the environment are never overwritten, so
/// the process environment and `./.env.local` win over this file. Setting
/// `ONAIR_STATE_DIR` here has no effect since the directory is already chosen.
/// Returns true if a file was loaded.
pub fn load_config_in(state_dir: &Path) -> bool {
    let env_path = env_file_in(state_dir);
    env_path.exists() && dotenvy::from_path(&env_path).is_ok()
}
