//! Repository Module
//!
//! Free functions over a `&SqlitePool`, one submodule per table.

pub mod employee;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// Record id that was not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Email that collided with an existing record
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_check_violation() => {
                RepoError::Validation(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => AppError::employee_not_found(&id),
            RepoError::Duplicate(email) => AppError::email_taken(&email),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Database operation failed");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_employee_not_found() {
        let err: AppError = RepoError::NotFound("abc".into()).into();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
        assert_eq!(err.message, "Employee with ID abc not found");
    }

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let err: AppError = RepoError::Duplicate("a@b.com".into()).into();
        assert_eq!(err.code, ErrorCode::EmployeeEmailExists);
        assert_eq!(err.http_status(), http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_error_is_not_leaked() {
        let err: AppError = RepoError::Database("disk I/O error at /var/x".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("/var/x"));
    }
}
