//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use guildhall_common::AppError;
use guildhall_core::{DomainError, PlatformError};
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or store failure
    Domain(DomainError),

    /// Application error (auth, validation, etc.)
    App(AppError),

    /// The chat platform failed or rejected a request
    Upstream(PlatformError),

    /// No usable credential for the caller
    Unauthenticated(String),

    /// Deployment is missing required configuration
    Configuration(String),

    /// Permission denied
    PermissionDenied { permission: String },

    /// Validation error
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Upstream(e) => write!(f, "{e}"),
            Self::Unauthenticated(msg) => write!(f, "Unauthenticated: {msg}"),
            Self::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            Self::PermissionDenied { permission } => {
                write!(f, "Missing required permission: {permission}")
            }
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            Self::Upstream(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create an unauthenticated error
    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a permission denied error
    pub fn permission_denied(permission: impl Into<String>) -> Self {
        Self::PermissionDenied {
            permission: permission.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_validation() => 400,
            Self::Domain(_) => 500,
            Self::App(e) => e.status_code(),
            Self::Upstream(PlatformError::NotFound) => 404,
            Self::Upstream(PlatformError::Status { status, .. }) if (400..600).contains(status) => {
                *status
            }
            Self::Upstream(_) => 502,
            Self::Unauthenticated(_) => 401,
            Self::PermissionDenied { .. } => 403,
            Self::Validation(_) => 400,
            Self::Configuration(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Upstream(PlatformError::NotFound) => "UNKNOWN_PLATFORM_RESOURCE",
            Self::Upstream(PlatformError::Status { .. }) => "PLATFORM_ERROR",
            Self::Upstream(_) => "PLATFORM_UNAVAILABLE",
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::Configuration(_) => "CONFIG_ERROR",
            Self::PermissionDenied { .. } => "MISSING_PERMISSIONS",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<PlatformError> for ServiceError {
    fn from(err: PlatformError) -> Self {
        Self::Upstream(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Upstream(PlatformError::NotFound) => {
                AppError::NotFound("platform resource".to_string())
            }
            ServiceError::Upstream(PlatformError::Status { status, message }) => {
                AppError::Upstream { status, message }
            }
            ServiceError::Upstream(e @ (PlatformError::Transport(_) | PlatformError::Decode(_))) => {
                AppError::ExternalService(e.to_string())
            }
            ServiceError::Unauthenticated(msg) => AppError::Unauthenticated(msg),
            ServiceError::Configuration(msg) => AppError::Config(msg),
            ServiceError::PermissionDenied { permission: _ } => AppError::InsufficientPermissions,
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
