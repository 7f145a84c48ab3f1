//! Client error types
//!
//! Every failure the page can see while talking to the activities API.

use thiserror::Error;

/// Errors from a single request to the activities API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Connection refused, DNS failure, aborted request
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status where one was required
    #[error("Unexpected status {status} from {path}")]
    Status { status: u16, path: String },

    /// Body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Result type for API calls
pub type ClientResult<T> = Result<T, ClientError>;
