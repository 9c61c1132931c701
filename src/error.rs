//! Error types for the `logsift` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in `logsift`.
///
/// Maps to exit codes: everything that prevents a scan from producing output → exit 1,
/// [`Io`](Self::Io) and [`Json`](Self::Json) while writing output → exit 2.
/// A single unreadable log file is not an error; see [`SkippedFile`](crate::collect::SkippedFile).
#[derive(Debug, Error)]
pub enum LogsiftError {
    /// Configuration error (invalid flag value, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The keyword-definition file could not be read.
    #[error("cannot read keywords file {}: {source}", .path.display())]
    Keywords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `--log` pattern is not a valid glob.
    #[error("invalid log file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// None of the `--log` patterns resolved to a file.
    #[error("no log files found matching the provided patterns")]
    NoInputFiles,

    /// Every resolved log file was missing or unreadable.
    #[error("none of the log files could be read")]
    NoReadableFiles,

    /// JSON serialization error in `--json` output.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogsiftError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) | Self::Json(_) => 2,
            Self::Config(_)
            | Self::Toml(_)
            | Self::Keywords { .. }
            | Self::Pattern { .. }
            | Self::NoInputFiles
            | Self::NoReadableFiles => 1,
        }
    }
}
