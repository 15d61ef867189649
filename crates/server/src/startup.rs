use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::observability;
use crate::routes;
use crate::state::{AppState, ServiceKind};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router for `kind` over fresh, empty stores.
pub fn build_app(kind: ServiceKind, cfg: &AppConfig) -> Router {
    let state = AppState::new(cfg.games.seed);
    routes::build_router(kind, state, build_cors())
}

fn spawn_admin(cfg: &AppConfig) {
    if !cfg.admin.enabled {
        return;
    }
    let addr = cfg.admin.bind_addr();
    tokio::spawn(async move {
        if let Err(e) = common::admin_http::serve_admin(&addr, observability::encode_metrics).await {
            error!(%addr, error = %e, "admin server stopped");
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "cannot listen for Ctrl+C");
        return;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Bind the configured address and serve `kind` until Ctrl+C.
pub async fn run(kind: ServiceKind, cfg: AppConfig) -> anyhow::Result<()> {
    spawn_admin(&cfg);

    let app = build_app(kind, &cfg);
    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(service = %kind, %addr, "starting service");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
