//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}

/// Errors raised while resolving database credentials.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Secret retrieval failed for '{id}': {reason}")]
    Retrieval { id: String, reason: String },

    #[error("Secret '{0}' has no string value")]
    Empty(String),

    #[error("Malformed credential bundle: {0}")]
    Malformed(String),
}
