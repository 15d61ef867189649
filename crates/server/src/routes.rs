use axum::{middleware, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::observability;
use crate::openapi;
use crate::state::{AppState, ServiceKind};

pub mod games;
pub mod items;
pub mod tasks;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the router for one service kind: its resource routes, `/health`,
/// Swagger UI at `/docs`, plus metrics, CORS and tracing layers. Games also
/// answers `/` and `/openapi.json` with its docs.
pub fn build_router(kind: ServiceKind, state: AppState, cors: CorsLayer) -> Router {
    let api = match kind {
        ServiceKind::Items => items::base_routes(),
        ServiceKind::ItemsExtended => items::extended_routes(),
        ServiceKind::Games => games::routes(),
        ServiceKind::Tasks => tasks::routes(),
    };

    let mut router = Router::new()
        .route("/health", get(health))
        .merge(api)
        .route_layer(middleware::from_fn_with_state(kind, observability::track_metrics))
        .with_state(state)
        .merge(openapi::swagger(kind));
    if kind == ServiceKind::Games {
        router = router.merge(games::docs_aliases());
    }

    router
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
