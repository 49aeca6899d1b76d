//! Backend entry-point: loads settings, prepares the entity store, and serves
//! the catalogue API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::settings::AppSettings;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_address().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(database_url) = settings.database_url.clone() {
        if settings.skip_migrations {
            info!("skipping schema migrations");
        } else {
            apply_migrations(database_url.clone()).await?;
        }
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
        )
        .await
        .map_err(|e| std::io::Error::other(format!("failed to build database pool: {e}")))?;
        config = config.with_db_pool(pool);
    }

    info!(%bind_addr, "starting cinema catalogue server");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}

/// Run the embedded migrations off the async runtime.
async fn apply_migrations(database_url: String) -> std::io::Result<()> {
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
        .map_err(std::io::Error::other)?;
    info!(applied, "schema migrations complete");
    Ok(())
}
