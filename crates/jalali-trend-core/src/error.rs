//! Error types for the trend library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::TimeUnit;

/// Comprehensive error type for all trend operations.
#[derive(Error, Debug)]
pub enum TrendError {
    /// Unknown time unit or aggregate function name
    #[error("Unsupported trend unit or function: {0}")]
    UnsupportedUnit(String),
    /// Bucket key that does not match the shape implied by its unit
    #[error("Invalid {unit} bucket key '{key}': {reason}")]
    InvalidBucketKey {
        unit: TimeUnit,
        key: String,
        reason: String,
    },
    /// Jalali year outside the range of representable civil dates
    #[error("Jalali year {year} is outside the supported range {min}..={max}")]
    DateOutOfRange { year: i32, min: i32, max: i32 },
    /// Unknown or unloadable IANA time zone
    #[error("Invalid time zone '{name}': {source}")]
    Timezone {
        name: String,
        #[source]
        source: jiff::Error,
    },
    /// Date arithmetic or parsing errors from jiff
    #[error("Date/time error: {0}")]
    DateTime(#[from] jiff::Error),
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrendError {
        TrendError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrendError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid bucket key error.
    pub fn bucket_key(unit: TimeUnit, key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidBucketKey {
            unit,
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrendError::database_error(message, e))
    }
}

/// Result type alias for trend operations
pub type Result<T> = std::result::Result<T, TrendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_key_error_message() {
        let err = TrendError::bucket_key(TimeUnit::Week, "2023", "missing week number");
        assert_eq!(
            err.to_string(),
            "Invalid week bucket key '2023': missing week number"
        );
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = TrendError::invalid_input("range").with_reason("must be positive");
        assert!(matches!(err, TrendError::InvalidInput { ref field, .. } if field == "range"));
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'range': must be positive"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::InvalidQuery);
        let err = result.db_context("Failed to run query").unwrap_err();
        assert_eq!(err.to_string(), "Database error: Failed to run query");
    }
}
