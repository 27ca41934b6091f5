//! # AppError
//!
//! Centralized error handling for the OpsDesk ecosystem.
//! Maps storage-layer failures to the three kinds the API distinguishes.

use thiserror::Error;

/// The primary error type for all od-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Update/delete target absent (e.g., Category, Todo)
    #[error("{0} not found with ID {1}")]
    NotFound(&'static str, String),

    /// Caller-side input failure (e.g., deleting without an id)
    #[error("validation error: {0}")]
    Validation(String),

    /// Backend unreachable or a read/write failed
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// A specialized Result type for OpsDesk logic.
pub type Result<T> = std::result::Result<T, AppError>;
