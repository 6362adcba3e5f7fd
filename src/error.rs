//! Error type shared by every command.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while generating, writing or reading daily documents.
#[derive(Debug, Error)]
pub enum DailyError {
    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// The path being read or written.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A JSON document could not be serialized or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A configuration file could not be parsed.
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        /// The config file path.
        path: PathBuf,
        /// The underlying YAML failure.
        #[source]
        source: serde_yaml::Error,
    },
    /// A configuration value is unusable.
    #[error("invalid config: {0}")]
    Config(String),
    /// A uniqueness retry loop ran out of attempts.
    #[error("could not generate a unique {what} after {attempts} attempts")]
    GenerationExhausted {
        /// What was being generated (e.g. "user").
        what: &'static str,
        /// The attempt bound that was exceeded.
        attempts: u32,
    },
    /// Command-line arguments were rejected.
    #[error(transparent)]
    Usage(#[from] clap::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, DailyError>;

impl DailyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
