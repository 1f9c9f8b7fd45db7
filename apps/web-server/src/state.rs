//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Result;

use postboard_core::ports::PostRepository;
use postboard_infra::InMemoryPostRepository;

use crate::config::AppConfig;
#[cfg(feature = "postgres")]
use crate::config::{DatabaseSettings, DatabaseSource};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// State backed by the process-local post store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()))
    }

    /// Build the state for the configured backend.
    ///
    /// Any failure (secret lookup, connection, schema creation) is returned
    /// so startup aborts instead of serving requests against a dead store.
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        match &config.database {
            None => {
                tracing::warn!("No database configured. Posts are kept in memory only.");
                Ok(Self::in_memory())
            }
            #[cfg(feature = "postgres")]
            Some(settings) => postgres_state(settings).await,
            #[cfg(not(feature = "postgres"))]
            Some(_) => anyhow::bail!(
                "a database is configured but this build has no postgres support"
            ),
        }
    }
}

#[cfg(feature = "postgres")]
async fn postgres_state(settings: &DatabaseSettings) -> Result<AppState> {
    use anyhow::Context;
    use migration::{Migrator, MigratorTrait};
    use postboard_infra::PostgresPostRepository;
    use postboard_infra::database::connect;

    let url = database_url(&settings.source).await?;
    let conn = connect(&settings.pool_config(url))
        .await
        .context("failed to connect to the post database")?;

    Migrator::up(&conn, None)
        .await
        .context("failed to create the posts table")?;

    tracing::info!("Using PostgreSQL post repository");
    Ok(AppState::new(Arc::new(PostgresPostRepository::new(conn))))
}

#[cfg(feature = "postgres")]
async fn database_url(source: &DatabaseSource) -> Result<String> {
    match source {
        DatabaseSource::Url(url) => Ok(url.clone()),
        #[cfg(feature = "aws-secrets")]
        DatabaseSource::Secret { id, region } => {
            use anyhow::Context;
            use postboard_infra::{AwsSecretsManager, resolve_database_url};

            let provider = AwsSecretsManager::from_env(region.clone()).await;
            resolve_database_url(&provider, id)
                .await
                .with_context(|| format!("failed to load database credentials from secret '{id}'"))
        }
        #[cfg(not(feature = "aws-secrets"))]
        DatabaseSource::Secret { .. } => {
            anyhow::bail!("DB_SECRET_ID is set but this build has no aws-secrets support")
        }
    }
}
