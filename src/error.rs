// error.rs - Crate error type

use std::path::PathBuf;
use thiserror::Error;

/// Result type for merge/validate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Data-quality problems are never reported through this type.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failure (unlistable directory, unreadable file, write failure)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input file without even a header row
    #[error("End of data: '{}' has no header row", .0.display())]
    EmptyInput(PathBuf),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected command line value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
