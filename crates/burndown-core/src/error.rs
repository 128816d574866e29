use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by wekan-burndown.
#[derive(Error, Debug)]
pub enum BurndownError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A timestamp string did not match any recognised format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// No board title matched the query.
    #[error("No board matching \"{0}\" was found")]
    BoardNotFound(String),

    /// No list title matched the query on the resolved board.
    #[error("No list matching \"{0}\" was found on this board")]
    ListNotFound(String),

    /// The expected export directory does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// No board export files were found under the given directory.
    #[error("No board export files found in {0}")]
    NoExportFiles(PathBuf),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the burndown crates.
pub type Result<T> = std::result::Result<T, BurndownError>;
