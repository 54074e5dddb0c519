/// Error types for catalog operations
use crate::validate::ValidationReport;
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors surfaced by catalog operations and the record service.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A draft failed field-level validation; the operation never reached
    /// the record service.
    #[error("validation failed: {0}")]
    Validation(ValidationReport),

    /// Network failure or timeout reaching the record service
    #[error("transport error: {0}")]
    Transport(String),

    /// The operation referenced an id the record service does not know
    #[error("record not found: {id}")]
    NotFound {
        /// The id that could not be resolved
        id: String,
    },

    /// The record service reported an internal failure
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body or a summary of it
        message: String,
    },

    /// The record service rejected the payload
    #[error("record rejected by server: {0}")]
    ValidationRejected(String),

    /// A response body could not be decoded. Defensive: the normalizer
    /// absorbs shape mismatches into defaults and never raises this.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl CatalogError {
    /// Whether this error was produced locally, before any remote call.
    pub fn is_local(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }
}
