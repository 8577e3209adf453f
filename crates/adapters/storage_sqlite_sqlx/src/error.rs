//! Storage-specific error type and constraint-violation translation.

use tagstore_domain::error::{ConflictError, TagstoreError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for TagstoreError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Translate a unique-constraint violation into `conflict`; anything
/// else becomes a storage error.
///
/// The authoritative uniqueness check happens at commit time in the
/// database, so this is where duplicate names and duplicate links
/// surface.
pub(crate) fn unique_conflict(err: sqlx::Error, conflict: ConflictError) -> TagstoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => conflict.into(),
        _ => StorageError::from(err).into(),
    }
}

/// Translate a foreign-key violation into `conflict`; anything else
/// becomes a storage error. Used for restricted deletes, where dependent
/// rows block the operation.
pub(crate) fn foreign_key_conflict(err: sqlx::Error, conflict: ConflictError) -> TagstoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => conflict.into(),
        _ => StorageError::from(err).into(),
    }
}
