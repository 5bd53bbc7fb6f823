//! Application state shared across handlers.

use sqlx::PgPool;

/// Application state shared across all handlers.
///
/// Holds the connection pool built once at startup. `PgPool` is itself a
/// cheaply cloneable handle, so cloning the state per request is free.
#[derive(Clone)]
pub struct AppState {
    pool: PgPool,
}

impl AppState {
    /// Create a new application state around an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}
