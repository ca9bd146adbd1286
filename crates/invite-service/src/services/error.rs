//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use invite_common::AppError;
use invite_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// An aggregate fetch failed or returned malformed rows
    DataUnavailable(DomainError),

    /// Sending, editing or reacting to a message failed
    Transport(DomainError),

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Validation error
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataUnavailable(e) => write!(f, "Invite data unavailable: {e}"),
            Self::Transport(e) => write!(f, "Message transport failed: {e}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DataUnavailable(e) | Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::DataUnavailable(_) => 503,
            Self::Transport(_) => 502,
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::DataUnavailable(_) => "DATA_UNAVAILABLE",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::DataUnavailable(e) => AppError::DataUnavailable(e.to_string()),
            ServiceError::Transport(e) => AppError::Transport(e.to_string()),
            ServiceError::NotFound { resource, id } => {
                AppError::not_found(format!("{resource} {id}"))
            }
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
