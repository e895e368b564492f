//! Error types for Meteor

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Meteor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Meteor
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Error classification reported back to the agent host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidArgument,
    UpstreamUnavailable,
    InternalError,
}

/// Structured error returned to the host in place of a tool result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    /// Classify this error for the host.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            Error::Http(e) if e.is_connect() || e.is_timeout() => ErrorKind::UpstreamUnavailable,
            _ => ErrorKind::InternalError,
        }
    }

    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

impl ErrorPayload {
    /// Read a tool reply back as an error payload, if that is what it is.
    pub fn from_reply(reply: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(reply.clone()).ok()
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal(err.to_string())
    }
}
