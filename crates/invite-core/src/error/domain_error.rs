//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found in guild")]
    MemberNotFound,

    // =========================================================================
    // Data Errors
    // =========================================================================
    #[error("Malformed aggregate row from {source_name}: {reason}")]
    MalformedRow {
        source_name: &'static str,
        reason: String,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Transport error: {0}")]
    TransportError(String),
}

impl DomainError {
    /// Create a malformed row error
    pub fn malformed(source_name: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            source_name,
            reason: reason.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MemberNotFound => "UNKNOWN_MEMBER",
            Self::MalformedRow { .. } => "MALFORMED_ROW",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::TransportError(_) => "TRANSPORT_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MemberNotFound)
    }

    /// Check if the error means the aggregate data could not be trusted
    pub fn is_data_failure(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::MalformedRow { .. })
    }
}
