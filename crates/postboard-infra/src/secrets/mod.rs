//! Database credential resolution.
//!
//! [`DatabaseCredentials`] is the JSON bundle stored in the secret store.
//! [`SecretProvider`](postboard_core::ports::SecretProvider) fetches the raw blob;
//! [`AwsSecretsManager`] implements it on top of AWS Secrets Manager.

#[cfg(feature = "aws-secrets")]
mod aws;
mod credentials;

#[cfg(feature = "aws-secrets")]
pub use aws::AwsSecretsManager;
pub use credentials::DatabaseCredentials;

use postboard_core::error::SecretError;
use postboard_core::ports::SecretProvider;

/// Fetch `secret_id` and turn it into a Postgres connection URL.
pub async fn resolve_database_url(
    provider: &dyn SecretProvider,
    secret_id: &str,
) -> Result<String, SecretError> {
    let raw = provider.fetch(secret_id).await?;
    let credentials = DatabaseCredentials::parse(&raw)?;
    tracing::info!(
        host = %credentials.host,
        port = credentials.port,
        database = %credentials.dbname,
        "Resolved database credentials"
    );
    Ok(credentials.connection_url())
}
