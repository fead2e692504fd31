use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::DynReservationRepo;

pub mod health_check;
pub mod reservation_controller;

#[derive(Clone)]
pub struct AppState {
    pub reservation_repo: DynReservationRepo,
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let application = application(app_state.clone(), &config.origin_urls)?;

    let address = config.socket_addr();
    let server = axum::Server::try_bind(&address)
        .with_context(|| format!("Failed to bind the API server to {}", address))?;
    info!("API server listening on: {}", address);

    let serve_res = server
        .serve(application.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error running the API server");

    app_state.reservation_repo.shutdown().await;
    info!("API server shut down");
    serve_res
}

pub fn application(
    app_state: AppState,
    origin_urls: &str,
) -> anyhow::Result<Router> {
    let cors = cors_layer(origin_urls)?;

    Ok(router_endpoints(app_state)
        .fallback(page_not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
        ))
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .merge(reservation_controller::router(app_state))
}

/// Every method and header is allowed. `*` admits any origin by echoing it back,
/// since a literal wildcard cannot be combined with credentials.
fn cors_layer(origin_urls: &str) -> anyhow::Result<CorsLayer> {
    let allow_origin = if origin_urls.trim() == "*" {
        AllowOrigin::mirror_request()
    } else {
        let origins = origin_urls
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<anyhow::Result<Vec<HeaderValue>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            warn!("Received SIGTERM, shutting down");
        }
    }
}
