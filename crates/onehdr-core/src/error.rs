//! Error types for onehdr

use std::path::PathBuf;
use thiserror::Error;

/// onehdr error type
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file '{0}' does not exist")]
    FileNotFound(String),

    #[error("Include depth limit of {limit} exceeded at '{}'", .path.display())]
    DepthExceeded { limit: usize, path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for onehdr
pub type Result<T> = std::result::Result<T, Error>;
