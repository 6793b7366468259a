//! Storage-specific error types.

use thiserror::Error;

/// Errors that can occur in the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database operation failed (sqlx error).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Insert collided with a unique column.
    #[error("duplicate value: {0}")]
    Duplicate(String),

    /// Insert pointed a foreign key at a row that does not exist.
    #[error("missing referenced row: {0}")]
    MissingReference(String),

    /// Connection string does not name a SQLite database.
    #[error("unsupported database url: {0}")]
    InvalidUrl(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
