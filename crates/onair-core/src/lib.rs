//! onAirChat Core - state and logic behind the chat screen.
//!
//! - **config**: state directory and log file locations, `.env.local` loading
//! - **directory**: the event list with search and live/upcoming filtering
//! - **seed**: built-in events and the demo transcript
//! - **session**: selection and transcript state machine

pub mod config;
pub mod directory;
pub mod error;
pub mod seed;
pub mod session;

pub use config::{
    env_file, env_file_in, load_config_in, load_local_env, log_file, log_file_in,
    logs_dir, logs_dir_in, state_dir,
};
pub use directory::{EventDirectory, EventFilter, EventQuery};
pub use error::{CoreError, Result};
pub use seed::{builtin_events, seed_messages};
pub use session::ChatSession;
