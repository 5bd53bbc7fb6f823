//! Database operations for the customer records `PostgreSQL` backend.
//!
//! ## Tables
//!
//! - `clientes` - Customer records (unique `email`, serial `cliente_id`)
//!
//! # Schema
//!
//! Migrations live in `crates/api/migrations/`, are embedded into the binary,
//! and are applied by [`ensure_schema`] on every startup. Already-applied
//! migrations are skipped, so repeated startups are no-ops.
//!
//! # Connections
//!
//! The pool is built once at startup and shared through `AppState`. Every
//! repository call executes against the pool, which checks out a connection
//! for that statement and returns it when the statement completes or fails.

pub mod customers;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::config::DatabaseConfig;

pub use customers::CustomerRepository;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Whether the failure means the database could not be reached at all,
    /// as opposed to the database rejecting the statement.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Database(
                sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
            )
        )
    }
}

/// Create a `PostgreSQL` connection pool.
///
/// Connects eagerly, so an unreachable database fails here rather than on
/// the first request.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.max_connections.min(2))
        .acquire_timeout(config.acquire_timeout)
        .connect(config.url.expose_secret())
        .await
}

/// Create the `clientes` table if it does not exist yet.
///
/// # Errors
///
/// Returns `MigrateError` if the database is unreachable or a migration fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_classification() {
        assert!(RepositoryError::Database(sqlx::Error::PoolTimedOut).is_unavailable());
        assert!(RepositoryError::Database(sqlx::Error::PoolClosed).is_unavailable());
        assert!(
            RepositoryError::Database(sqlx::Error::Io(std::io::Error::from(
                std::io::ErrorKind::ConnectionRefused
            )))
            .is_unavailable()
        );

        assert!(!RepositoryError::Database(sqlx::Error::RowNotFound).is_unavailable());
        assert!(!RepositoryError::NotFound.is_unavailable());
        assert!(!RepositoryError::Conflict("email".to_string()).is_unavailable());
    }

    #[test]
    fn test_migrations_are_embedded() {
        assert!(MIGRATOR.iter().any(|m| m.description.contains("clientes")));
    }
}
