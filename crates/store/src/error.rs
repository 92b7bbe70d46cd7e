//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the persistence and export layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Refusing to overwrite an existing firm/year file.
    #[error("File already exists: {0}")]
    AlreadyExists(PathBuf),
}
