//! Async connection pool for the catalogue database.
//!
//! Wraps `diesel-async` with `bb8`. Checkout is non-blocking and bounded by
//! the configured timeout; failures surface as [`PoolError`] and become
//! connection errors at the repository boundary.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Errors raised while building or using the pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available.
    #[error("failed to get connection from pool: {message}")]
    Checkout {
        /// Underlying cause.
        message: String,
    },

    /// The pool could not be constructed.
    #[error("failed to build connection pool: {message}")]
    Build {
        /// Underlying cause.
        message: String,
    },
}

impl PoolError {
    /// Checkout failure.
    #[must_use]
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Construction failure.
    #[must_use]
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Pool sizing and timeouts.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://cinema@localhost/cinema")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Defaults: ten connections, two idle, thirty second checkout timeout.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: Some(2),
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Cap the number of open connections. `min_idle` is clamped to match.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size.max(1);
        self.min_idle = self.min_idle.map(|idle| idle.min(self.max_size));
        self
    }

    /// Keep at least this many idle connections.
    #[must_use]
    pub const fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Give up on checkout after `timeout`.
    #[must_use]
    pub const fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Target database.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Maximum number of open connections.
    #[must_use]
    pub const fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Shared pool of async PostgreSQL connections.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when the pool cannot be constructed.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Check out a connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when no connection frees up within the
    /// configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults() {
        let config = PoolConfig::new("postgres://localhost/cinema");

        assert_eq!(config.database_url(), "postgres://localhost/cinema");
        assert_eq!(config.max_size, 10);
        assert_eq!(config.min_idle, Some(2));
        assert_eq!(config.connection_timeout, Duration::from_secs(30));
    }

    #[rstest]
    #[case(1, Some(1))]
    #[case(0, Some(1))]
    #[case(20, Some(2))]
    fn max_size_clamps_idle_connections(#[case] max_size: u32, #[case] expected_idle: Option<u32>) {
        let config = PoolConfig::new("postgres://localhost/cinema").with_max_size(max_size);

        assert_eq!(config.min_idle, expected_idle);
        assert!(config.max_size() >= 1);
    }

    #[rstest]
    fn error_display_keeps_cause() {
        assert!(
            PoolError::checkout("connection refused")
                .to_string()
                .contains("connection refused")
        );
        assert!(PoolError::build("invalid URL").to_string().contains("invalid URL"));
    }
}
