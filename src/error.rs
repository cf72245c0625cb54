// File: src/error.rs
use std::io;

/// Failures at the crate's I/O and configuration edges. Translation itself
/// never fails.
#[derive(Debug, thiserror::Error)]
pub enum MorseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("history encoding error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("invalid history file: {0}")]
    InvalidHistoryFile(&'static str),
    #[error("invalid value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MorseError>;
