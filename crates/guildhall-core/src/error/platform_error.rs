//! Platform errors - failures talking to the chat platform's REST API

use thiserror::Error;

/// Errors returned by a [`PlatformClient`](crate::traits::PlatformClient)
///
/// `NotFound` is kept apart from every other failure: callers treat a 404
/// as a meaningful answer (e.g. "not a member") rather than an outage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("Resource not found on platform")]
    NotFound,

    #[error("Platform responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Platform request failed: {0}")]
    Transport(String),

    #[error("Invalid platform response: {0}")]
    Decode(String),
}

impl PlatformError {
    /// Check if the platform reported the resource as absent
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Status code the platform answered with, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Result type for platform operations
pub type PlatformResult<T> = Result<T, PlatformError>;
