//! Error types for the data-loader crate.
//!
//! Every variant describes a way the perk collection could not be obtained.
//! Callers treat them uniformly as a failed load: nothing here is retried.

use thiserror::Error;

/// Errors that can occur while fetching or decoding the perk collection.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The HTTP client could not be constructed from the configuration
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("Backend returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// The payload was not a perk collection
    #[error("Failed to decode perk payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// I/O error while reading a local payload
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Two records in one payload share an id
    #[error("Duplicate perk id in payload: {id}")]
    DuplicateId { id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, LoadError>;
