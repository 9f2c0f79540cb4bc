use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReaderError>;

/// Errors raised outside the alignment core: file access, data and config
/// parsing, and lookups requested from the command line.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid break-starter table: {0}")]
    InvalidBreakStarter(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl ReaderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReaderError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ReaderError::Json {
            path: path.into(),
            source,
        }
    }
}
