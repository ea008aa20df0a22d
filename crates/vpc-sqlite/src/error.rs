//! Error types for SQLite storage

use thiserror::Error;

/// SQLite storage error type
#[derive(Error, Debug)]
pub enum SqliteError {
    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution error
    #[error("Query error: {0}")]
    Query(String),

    /// Schema/migration error
    #[error("Schema error: {0}")]
    Schema(String),

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Stored value could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Underlying rusqlite error
    #[error("SQLite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for SQLite operations
pub type SqliteResult<T> = Result<T, SqliteError>;

impl From<SqliteError> for vpc_core::StorageError {
    fn from(err: SqliteError) -> Self {
        match err {
            SqliteError::Connection(msg) => Self::Backend(msg),
            SqliteError::Query(msg) => Self::Backend(msg),
            SqliteError::Schema(msg) => Self::Backend(msg),
            SqliteError::NotFound(msg) => Self::NotFound(msg),
            SqliteError::Serialization(msg) => Self::Serialization(msg),
            SqliteError::Rusqlite(e) => Self::Backend(e.to_string()),
        }
    }
}
