// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroupError {
    #[error("invalid threshold {value}: must be an integer between 0 and 100")]
    InvalidThreshold { value: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GroupError {
    /// True for errors caused by bad user-supplied settings rather than the environment.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidThreshold { .. } | Self::Config { .. })
    }
}

pub type Result<T> = std::result::Result<T, GroupError>;

// Allow `?` on std::io::Error by converting to GroupError::Io with unknown path.
impl From<std::io::Error> for GroupError {
    fn from(source: std::io::Error) -> Self {
        GroupError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
