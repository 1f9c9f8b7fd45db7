//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory storage only
//! - `postgres` - PostgreSQL post storage via SeaORM
//! - `aws-secrets` - Database credentials from AWS Secrets Manager

pub mod database;
pub mod secrets;

pub use database::{DatabaseConfig, InMemoryPostRepository};
pub use secrets::{DatabaseCredentials, resolve_database_url};

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;

#[cfg(feature = "aws-secrets")]
pub use secrets::AwsSecretsManager;
