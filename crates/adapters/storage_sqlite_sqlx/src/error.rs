//! Storage-specific error type wrapping sqlx errors.

use monty_domain::error::MontyError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed. Covers foreign-key violations on
    /// readings whose room does not exist.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for MontyError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
