use async_trait::async_trait;
use aws_sdk_secretsmanager::config::Region;

use postboard_core::error::SecretError;
use postboard_core::ports::SecretProvider;

/// Resolves secrets from AWS Secrets Manager.
///
/// Credentials come from the ambient AWS configuration (env vars, instance
/// profile, etc.); the region can be pinned explicitly.
pub struct AwsSecretsManager {
    client: aws_sdk_secretsmanager::Client,
}

impl AwsSecretsManager {
    /// Load the ambient AWS configuration, overriding the region when given.
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;

        Self {
            client: aws_sdk_secretsmanager::Client::new(&config),
        }
    }
}

#[async_trait]
impl SecretProvider for AwsSecretsManager {
    async fn fetch(&self, secret_id: &str) -> Result<String, SecretError> {
        tracing::debug!(secret_id, "Fetching secret from Secrets Manager");

        let resp = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| SecretError::Retrieval {
                id: secret_id.to_owned(),
                reason: aws_sdk_secretsmanager::error::DisplayErrorContext(&e).to_string(),
            })?;

        resp.secret_string()
            .map(str::to_owned)
            .ok_or_else(|| SecretError::Empty(secret_id.to_owned()))
    }
}
