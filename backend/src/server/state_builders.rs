//! Builders for the HTTP state from the configured entity store.

use actix_web::web;
use tracing::info;

use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryCatalogue;
use backend::outbound::persistence::DieselCatalogue;

use super::ServerConfig;

/// Wire the resource services over PostgreSQL when a pool is configured,
/// otherwise over a fresh in-memory catalogue.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = config.db_pool.as_ref().map_or_else(
        || {
            info!(store = "memory", "catalogue store selected");
            HttpState::from_store(InMemoryCatalogue::new())
        },
        |pool| {
            info!(store = "postgres", "catalogue store selected");
            HttpState::from_store(DieselCatalogue::new(pool.clone()))
        },
    );
    web::Data::new(state)
}
