//! Error types for the Concierge core library.

use thiserror::Error;

use crate::model::RequestId;

/// Result type alias using the Concierge `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Concierge operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A mutation targeted a request that is not in the store.
    #[error("Request {0} not found")]
    RequestNotFound(RequestId),

    /// Blank note or message text reached the dispatcher.
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    /// A string did not name a known enum variant.
    #[error("Invalid {kind}: {value:?}")]
    InvalidValue { kind: &'static str, value: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
