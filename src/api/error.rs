/// Error types for the data source client
use thiserror::Error;

/// Errors that can occur while fetching the user list
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or body transfer failure
    #[error("Network error: {0}")]
    Network(String),

    /// The source answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// The body was not a list of user records
    #[error("Failed to decode user list: {0}")]
    Decode(String),
}
