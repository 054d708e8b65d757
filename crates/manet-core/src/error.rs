//! Core error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into
//! them via `From` impls, keeping error sites clean.

use thiserror::Error;

/// Errors raised by `manet-core` primitives.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
