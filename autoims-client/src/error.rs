//! Client error types

use thiserror::Error;

/// Client error type
///
/// The tagged result every request-issuing function returns: the session
/// guard branches on `Unauthorized`, the views surface everything else.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP 401 - treated as a navigation event, not a user-facing error
    #[error("authentication required")]
    Unauthorized,

    /// Client-side validation failure; no request was issued
    #[error("validation error: {0}")]
    Validation(String),

    /// Backend rejection (non-401 4xx/5xx) with its `error` message verbatim
    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network/transport failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be interpreted
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Whether this error must be handled by the session guard (token clear
    /// plus redirect) instead of being shown to the user.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
