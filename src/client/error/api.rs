use std::time::Duration;

use thiserror::Error;

/// A failed API request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// No response within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// The server answered with a non-2xx status.
    ///
    /// `message` is the `error` field of the response body when present, otherwise the raw body.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),
    /// The response body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returned by every request in builds without the `web` feature.
    pub fn web_only() -> Self {
        Self::Transport("requests are only available in the web build".to_string())
    }

    /// The message to show the user: the server's own message for status errors.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            err => err.to_string(),
        }
    }
}
