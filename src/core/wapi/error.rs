//! WAPI client error types.

use thiserror::Error;

/// Result type for WAPI operations.
pub type WapiResult<T> = Result<T, WapiError>;

/// Errors raised while talking to the Infoblox grid.
#[derive(Debug, Error)]
pub enum WapiError {
    /// The grid answered with a non-2xx status.
    #[error("WAPI request failed with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, TLS or timeout failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("Failed to decode WAPI response: {0}")]
    Decode(String),

    /// The composed request URL is invalid.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("Client setup failed: {0}")]
    Setup(String),
}

impl WapiError {
    /// Create a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Create a setup error.
    pub fn setup(msg: impl Into<String>) -> Self {
        Self::Setup(msg.into())
    }
}

impl From<reqwest::Error> for WapiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Transport("request timed out".to_string());
        }
        Self::Transport(err.to_string())
    }
}
