//! Server settings loaded via OrthoConfig.
//!
//! Precedence, lowest first: configuration file, `CINEMA_*` environment
//! variables, command-line flags.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Runtime configuration for the catalogue server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CINEMA")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_address: Option<String>,
    /// PostgreSQL connection URL. When unset the server keeps the catalogue
    /// in memory.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Skip the embedded migrations at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddress {
        /// Rejected value.
        value: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },
}

impl AppSettings {
    /// Return the configured bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddress`] when the value does not parse.
    pub fn bind_address(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_address.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS);
        value.parse().map_err(|source| SettingsError::BindAddress {
            value: value.to_owned(),
            source,
        })
    }

    /// Return the configured pool size, falling back to 10.
    #[must_use]
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}
