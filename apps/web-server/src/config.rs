//! Application configuration loaded from environment variables.
//!
//! Everything is validated up front so a bad setting stops the process
//! before it accepts any request.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use postboard_infra::DatabaseConfig;

/// Where the database URL comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseSource {
    /// `DATABASE_URL`, used as-is.
    Url(String),
    /// A credential bundle stored in AWS Secrets Manager.
    Secret { id: String, region: Option<String> },
}

/// Database settings. The URL is resolved later, once secrets can be fetched.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub source: DatabaseSource,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl DatabaseSettings {
    /// Pool configuration for an already resolved URL.
    pub fn pool_config(&self, url: String) -> DatabaseConfig {
        DatabaseConfig {
            url,
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            connect_timeout: self.connect_timeout,
            acquire_timeout: self.acquire_timeout,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` selects the in-memory post store.
    pub database: Option<DatabaseSettings>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = match (
            non_empty(&lookup, "DATABASE_URL"),
            non_empty(&lookup, "DB_SECRET_ID"),
        ) {
            (Some(url), _) => Some(DatabaseSource::Url(url)),
            (None, Some(id)) => Some(DatabaseSource::Secret {
                id,
                region: non_empty(&lookup, "DB_SECRET_REGION")
                    .or_else(|| non_empty(&lookup, "AWS_REGION")),
            }),
            (None, None) => None,
        };

        let database = match source {
            Some(source) => {
                let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 10u32)?;
                let min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", 1u32)?;
                if min_connections > max_connections {
                    bail!(
                        "DB_MIN_CONNECTIONS ({min_connections}) exceeds DB_MAX_CONNECTIONS ({max_connections})"
                    );
                }

                Some(DatabaseSettings {
                    source,
                    max_connections,
                    min_connections,
                    connect_timeout: Duration::from_secs(parse_or(
                        &lookup,
                        "DB_CONNECT_TIMEOUT_SECS",
                        10u64,
                    )?),
                    acquire_timeout: Duration::from_secs(parse_or(
                        &lookup,
                        "DB_ACQUIRE_TIMEOUT_SECS",
                        5u64,
                    )?),
                })
            }
            None => None,
        };

        Ok(Self {
            host: non_empty(&lookup, "HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 5000u16)?,
            database,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match non_empty(lookup, key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_in_memory_on_port_5000() {
        let config = config(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_database_url_wins_over_secret() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/posts"),
            ("DB_SECRET_ID", "prod/db"),
        ])
        .unwrap();
        let db = config.database.unwrap();
        assert_eq!(
            db.source,
            DatabaseSource::Url("postgres://localhost/posts".to_string())
        );
        assert_eq!(db.max_connections, 10);
    }

    #[test]
    fn test_secret_region_falls_back_to_aws_region() {
        let config = config(&[("DB_SECRET_ID", "prod/db"), ("AWS_REGION", "eu-west-1")]).unwrap();
        assert_eq!(
            config.database.unwrap().source,
            DatabaseSource::Secret {
                id: "prod/db".to_string(),
                region: Some("eu-west-1".to_string()),
            }
        );
    }

    #[test]
    fn test_invalid_numbers_fail_fast() {
        assert!(config(&[("PORT", "http")]).is_err());
        assert!(
            config(&[
                ("DATABASE_URL", "postgres://localhost/posts"),
                ("DB_MAX_CONNECTIONS", "many"),
            ])
            .is_err()
        );
    }

    #[test]
    fn test_min_connections_above_max_is_rejected() {
        let err = config(&[
            ("DATABASE_URL", "postgres://localhost/posts"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("DB_MIN_CONNECTIONS", "5"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("DB_MIN_CONNECTIONS"));
    }
}
