use std::io;

use thiserror::Error;

use crate::core::validator::ValidationReport;

/// Failures raised while reading or writing the persisted record slot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage quota exceeded: {needed} bytes requested, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by the view controller when a submit cannot be committed.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Invalid input: {}", .0.summary())]
    Validation(ValidationReport),
    #[error("Record was not saved: {0}")]
    Persistence(#[from] PersistenceError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}
