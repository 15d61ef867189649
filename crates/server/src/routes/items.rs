use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use common::types::Message;
use models::Item;
use serde_json::Value;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

/// Create + get by name.
pub fn base_routes() -> Router<AppState> {
    Router::new()
        .route("/items/", post(create_item))
        .route("/items", post(create_item))
        .route("/items/:name", get(get_item))
}

/// Base routes plus listing and deletion.
pub fn extended_routes() -> Router<AppState> {
    Router::new()
        .route("/items/", post(create_item).get(list_items))
        .route("/items", post(create_item).get(list_items))
        .route("/items/:name", get(get_item).delete(delete_item))
}

#[utoipa::path(
    post, path = "/items/", tag = "items",
    request_body = crate::openapi::ItemDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ItemDoc),
        (status = 400, description = "Item already exists", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), JsonApiError> {
    let Json(body) = payload?;
    let item = Item::from_json(&body)?;
    let created = state.items.create(item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/items/{name}", tag = "items",
    params(("name" = String, Path, description = "Item name")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ItemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Item>, JsonApiError> {
    Ok(Json(state.items.get(&name).await?))
}

#[utoipa::path(
    get, path = "/items", tag = "items",
    responses((status = 200, description = "All items in creation order", body = [crate::openapi::ItemDoc]))
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items.list().await)
}

#[utoipa::path(
    delete, path = "/items/{name}", tag = "items",
    params(("name" = String, Path, description = "Item name")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Message>, JsonApiError> {
    state.items.delete(&name).await?;
    info!(%name, "item removed via api");
    Ok(Json(Message::new("Item deleted successfully")))
}
