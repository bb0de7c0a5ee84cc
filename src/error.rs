//! Error types for password validation and credential lookup.
//!
//! Every variant is recoverable: the caller renders the message and the user
//! resubmits corrected input.

use std::io;

use thiserror::Error;

/// A password or record that does not satisfy the input rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all the fields")]
    EmptyField,

    #[error("Password must be 8-12 characters long")]
    InvalidLength,

    #[error("Password must contain at least one symbol (@, !, #, ...)")]
    MissingSymbol,

    #[error("Password must contain at least one number (0-9)")]
    MissingNumber,
}

impl ValidationError {
    /// Short title suitable for a dialog or message header.
    pub fn category(&self) -> &'static str {
        match self {
            ValidationError::EmptyField => "Empty Field",
            ValidationError::InvalidLength => "Invalid Length",
            ValidationError::MissingSymbol => "Missing Symbol",
            ValidationError::MissingNumber => "Missing Number",
        }
    }
}

/// A lookup that found nothing to return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    /// The store file does not exist yet.
    #[error("No data found")]
    NoData,

    /// The store exists but has no record for this website.
    #[error("No details for {0} found")]
    NoEntry(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("Store I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed store file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to replace store file: {0}")]
    Persist(#[from] tempfile::PersistError),
}
