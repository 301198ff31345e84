// models/src/errors.rs
use std::io;
pub use thiserror::Error;
use serde::{Serialize, Deserialize};
use serde_json::Error as SerdeJsonError;

#[derive(Debug, Serialize, Deserialize, Error, Clone, PartialEq, Eq)]
pub enum RecordsError {
    #[error("Validation error: {0}")]
    Validation(String), // A required key was blank
    #[error("Entity already exists: {0}")]
    DuplicateKey(String),
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),
    #[error("entity with identifier {0} was not found")]
    NotFound(String),
    #[error("Invalid role: {0}")]
    InvalidRole(String),
    #[error("{0}")]
    Authorization(String), // Synthesized by the access-control proxy, never by storage
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Failed to acquire lock: {0}")]
    LockError(String),
    #[error("password hashing failed: {0}")]
    PasswordHashing(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl RecordsError {
    pub fn is_authorization(&self) -> bool {
        matches!(self, RecordsError::Authorization(_))
    }
}

// Implement From for io::Error
impl From<io::Error> for RecordsError {
    fn from(err: io::Error) -> Self {
        RecordsError::Io(err.to_string())
    }
}

// Implement From for serde_json::Error
impl From<SerdeJsonError> for RecordsError {
    fn from(err: SerdeJsonError) -> Self {
        RecordsError::Serialization(format!("JSON serialization error: {}", err))
    }
}

/// A type alias for a `Result` that returns a `RecordsError` on failure.
pub type RecordsResult<T> = Result<T, RecordsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_to_io_kind() {
        let err: RecordsError = io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into();
        assert!(matches!(err, RecordsError::Io(ref msg) if msg.contains("read-only")));
    }

    #[test]
    fn json_errors_convert_to_serialization_kind() {
        let err: RecordsError = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err().into();
        assert!(matches!(err, RecordsError::Serialization(_)));
    }

    #[test]
    fn authorization_message_is_displayed_verbatim() {
        let err = RecordsError::Authorization("DeletePatient requires role Admin".to_string());
        assert!(err.is_authorization());
        assert_eq!(err.to_string(), "DeletePatient requires role Admin");
    }
}
