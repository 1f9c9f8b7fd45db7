//! Secret provider port.

use async_trait::async_trait;

use crate::error::SecretError;

/// Fetches a secret blob by name from a remote secret store.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Return the raw string value stored under `secret_id`.
    async fn fetch(&self, secret_id: &str) -> Result<String, SecretError>;
}
