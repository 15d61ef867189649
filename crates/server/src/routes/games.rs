use axum::{extract::State, response::Redirect, routing::get, Json, Router};
use models::Game;
use service::games::GAMES_PER_REQUEST;

use crate::openapi;
use crate::state::{AppState, ServiceKind};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(get_games))
        .route("/games/", get(get_games))
}

/// The games API historically served its docs from the root.
pub fn docs_aliases() -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/docs/") }))
        .route("/openapi.json", get(|| async { Json(openapi::api_doc(ServiceKind::Games)) }))
}

/// Returns a list of games with random data.
#[utoipa::path(
    get, path = "/games", tag = "games",
    responses((status = 200, description = "Five freshly generated games", body = [crate::openapi::GameDoc]))
)]
pub async fn get_games(State(state): State<AppState>) -> Json<Vec<Game>> {
    Json(state.games.generate(GAMES_PER_REQUEST).await)
}
