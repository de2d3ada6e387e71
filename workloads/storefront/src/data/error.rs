//! Collaborator error types.

use storefront_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur when fetching data from a collaborator.
#[derive(Error, Debug)]
pub enum DataError {
    /// The requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The collaborator could not be reached or is in a bad state.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The collaborator returned a document we could not read.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The document parsed but holds values the domain rejects.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Reading a fixture file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Parse(e.to_string())
    }
}

/// Result type for collaborator calls.
pub type DataResult<T> = Result<T, DataError>;
