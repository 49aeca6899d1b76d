//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use std::future::Future;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::routes;
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(routes::configure)
        .service(ready)
        .service(live)
        .configure(api_docs)
}

/// Swagger UI at `/docs`, debug builds only.
fn api_docs(cfg: &mut web::ServiceConfig) {
    #[cfg(debug_assertions)]
    cfg.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let _ = cfg;
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(config.bind_addr())?
        .disable_signals()
        .run();

    health_state.mark_ready();
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        drain_on(shutdown_signal(), &health_state, &handle).await;
    });
    Ok(server)
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            interrupted = tokio::signal::ctrl_c() => interrupted,
            _ = terminate.recv() => Ok(()),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

/// Once `signal` fires, fail liveness checks and stop the server gracefully.
async fn drain_on(
    signal: impl Future<Output = std::io::Result<()>>,
    health_state: &HealthState,
    handle: &ServerHandle,
) {
    if let Err(error) = signal.await {
        warn!(%error, "shutdown signal listener failed; stopping now");
    }
    info!("shutdown requested, draining connections");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}
