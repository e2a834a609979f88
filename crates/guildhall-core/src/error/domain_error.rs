//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Too many staff roles: max {max}")]
    TooManyStaffRoles { max: usize },

    #[error("Channel {0} cannot be used as a log channel")]
    InvalidLogChannel(Snowflake),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::TooManyStaffRoles { .. } => "TOO_MANY_STAFF_ROLES",
            Self::InvalidLogChannel(_) => "INVALID_LOG_CHANNEL",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::TooManyStaffRoles { .. } | Self::InvalidLogChannel(_)
        )
    }
}
