//! Domain errors for the Better Papers service.

use thiserror::Error;

/// Domain-level errors that can occur while fetching, caching, or serving papers.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Transport failure, timeout, non-2xx status, or unparseable feed body.
    #[error("Upstream feed unavailable: {0}")]
    UpstreamUnavailable(String),

    /// No cached document exists for the category.
    #[error("Category not found: {0}")]
    NotFound(String),

    /// Any object-store failure other than a missing key.
    #[error("Store failure: {0}")]
    StoreFailure(String),

    /// A single feed entry could not be projected into a paper record.
    #[error("Malformed entry: {0}")]
    MalformedEntry(String),

    #[error("Invalid category code: {0:?}")]
    InvalidCategory(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
