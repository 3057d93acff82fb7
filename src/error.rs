// src/error.rs

//! Crate-wide error type

use crate::cookbook::{SummaryError, ValidationError};
use thiserror::Error;

/// Errors surfaced by the cookbook library
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Seed document has the wrong overall shape
    #[error("Invalid seed document: {0}")]
    Seed(String),

    /// A seed element was rejected by validation
    #[error("Seed entry {index} rejected: {source}")]
    SeedEntry {
        index: usize,
        source: ValidationError,
    },
}

/// Result type for cookbook operations
pub type Result<T> = std::result::Result<T, Error>;
