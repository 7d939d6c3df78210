//! Error types for directory loading and configuration.

use std::path::PathBuf;

use onair_models::EventId;
use thiserror::Error;

/// Errors that can occur while preparing the chat screen.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Two events share the same ID.
    #[error("duplicate event id: {0}")]
    DuplicateEventId(EventId),

    /// Events file could not be read.
    #[error("failed to read events file {}: {source}", .path.display())]
    Io {
        /// File that failed to load
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Events file is not a valid JSON event list.
    #[error("invalid events file {}: {source}", .path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Unrecognized filter name.
    #[error("unknown filter '{0}' (expected all, live or upcoming)")]
    UnknownFilter(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
