//! Error types for manet-store.

use thiserror::Error;

/// Errors reported by topology store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failure from a non-SQLite backend (or a test fake).
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
