//! Error handling for survey-store
//!
//! Wraps survey-core ExError with store-specific helpers

use rusqlite::ErrorCode;
use survey_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// SQLite's message for a second registration under the same name
const DUPLICATE_USERNAME: &str = "UNIQUE constraint failed: users.username";

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
///
/// Constraint failures are classified so callers can tell a duplicate
/// username (`AlreadyExists`) from a dangling reference or a failed CHECK
/// (`ConstraintViolation`). Everything else is `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    if let rusqlite::Error::SqliteFailure(failure, detail) = &err {
        if failure.code == ErrorCode::ConstraintViolation {
            let message = detail.clone().unwrap_or_else(|| err.to_string());
            let kind = if message.contains(DUPLICATE_USERNAME) {
                ExErrorKind::AlreadyExists
            } else {
                ExErrorKind::ConstraintViolation
            };
            return ExError::new(kind).with_op("sqlite").with_message(message);
        }
    }
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
