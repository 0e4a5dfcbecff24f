//! Error types for pgpass-rs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when locating or reading a pgpass file.
#[derive(Error, Debug)]
pub enum Error {
    /// Pgpass file not found.
    #[error("pgpass file not found: {0}")]
    FileNotFound(PathBuf),

    /// Failed to read a pgpass file.
    #[error("failed to read pgpass file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `PGPASSFILE` is not set and the platform default location could not
    /// be determined (no home directory, or `APPDATA` unset on Windows).
    #[error("default pgpass location could not be determined")]
    DefaultPathUnavailable,
}

/// Result type alias for pgpass-rs operations.
pub type Result<T> = std::result::Result<T, Error>;
