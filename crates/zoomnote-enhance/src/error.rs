//! Enhancement failure kinds.
//!
//! None of these ever reach the user as a failure: the enhancer turns every
//! one of them into a local result and keeps the error as a diagnostic.

/// Why a remote enhancement was not used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnhanceError {
    /// No credential is configured.
    #[error("no credential configured")]
    NoCredential,

    /// The credential is blank or was rejected by the service.
    #[error("credential rejected")]
    InvalidCredential,

    /// The request did not complete within the time bound.
    #[error("request timed out")]
    Timeout,

    /// The service asked the client to slow down.
    #[error("rate limited")]
    RateLimited,

    /// The service failed or could not be reached.
    #[error("server error{}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    ServerError { status: Option<u16> },

    /// The response could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The decoded response violated a content constraint.
    #[error("validation failed: {0}")]
    ValidationFailed(String),
}

impl EnhanceError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoCredential => "NO_CREDENTIAL",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::Timeout => "TIMEOUT",
            Self::RateLimited => "RATE_LIMITED",
            Self::ServerError { .. } => "SERVER_ERROR",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::ValidationFailed(_) => "VALIDATION_FAILED",
        }
    }

    /// Maps a non-success HTTP status to a failure kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::InvalidCredential,
            429 => Self::RateLimited,
            other => Self::ServerError {
                status: Some(other),
            },
        }
    }
}
