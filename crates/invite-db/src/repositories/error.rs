//! Error handling utilities for repositories

use invite_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Decode failures mean the row shape did not match the model, which is a
/// malformed result rather than an unreachable database.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match e {
        SqlxError::ColumnDecode { .. } | SqlxError::ColumnNotFound(_) | SqlxError::Decode(_) => {
            DomainError::malformed("database", e.to_string())
        }
        other => DomainError::DatabaseError(other.to_string()),
    }
}
