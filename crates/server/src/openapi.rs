//! OpenAPI documents, one per service kind, served through Swagger UI.
//!
//! Request bodies are validated by hand, so the schemas below only document
//! the wire shapes.

use utoipa::OpenApi;
use utoipa::ToSchema;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::ServiceKind;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    /// Message string, or a list of `{loc, msg, type}` for validation errors.
    #[schema(value_type = Object)]
    pub detail: serde_json::Value,
}

#[derive(ToSchema)]
pub struct ItemDoc {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct GameDoc {
    pub title: String,
    pub description: String,
    pub price: f64,
    /// `YYYY-MM-DD`
    pub date_released: String,
}

#[derive(ToSchema)]
pub struct OnlineStatusDoc {
    pub status: String,
    pub timestamp: String,
}

#[derive(ToSchema)]
pub struct TaskDoc {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub created_at: String,
    pub completed: bool,
}

#[derive(ToSchema)]
pub struct TaskCreateDoc {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

#[derive(ToSchema)]
pub struct TaskUpdateDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Items API", version = "1.0.0"),
    paths(
        crate::routes::health,
        crate::routes::items::create_item,
        crate::routes::items::get_item,
    ),
    components(schemas(HealthResponse, ErrorDoc, ItemDoc)),
    tags((name = "health"), (name = "items"))
)]
pub struct ItemsApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "Items API", version = "1.1.0"),
    paths(
        crate::routes::health,
        crate::routes::items::create_item,
        crate::routes::items::get_item,
        crate::routes::items::list_items,
        crate::routes::items::delete_item,
    ),
    components(schemas(HealthResponse, ErrorDoc, ItemDoc, MessageDoc)),
    tags((name = "health"), (name = "items"))
)]
pub struct ItemsExtendedApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "Game Data API", version = "1.0.0"),
    paths(crate::routes::health, crate::routes::games::get_games),
    components(schemas(HealthResponse, GameDoc)),
    tags((name = "health"), (name = "games"))
)]
pub struct GamesApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "Task Management API", version = "1.0.0"),
    paths(
        crate::routes::health,
        crate::routes::tasks::root,
        crate::routes::tasks::create_task,
        crate::routes::tasks::list_tasks,
        crate::routes::tasks::get_task,
        crate::routes::tasks::update_task,
        crate::routes::tasks::delete_task,
        crate::routes::tasks::complete_task,
    ),
    components(schemas(HealthResponse, ErrorDoc, OnlineStatusDoc, TaskDoc, TaskCreateDoc, TaskUpdateDoc)),
    tags((name = "health"), (name = "tasks"))
)]
pub struct TasksApiDoc;

pub fn api_doc(kind: ServiceKind) -> utoipa::openapi::OpenApi {
    match kind {
        ServiceKind::Items => ItemsApiDoc::openapi(),
        ServiceKind::ItemsExtended => ItemsExtendedApiDoc::openapi(),
        ServiceKind::Games => GamesApiDoc::openapi(),
        ServiceKind::Tasks => TasksApiDoc::openapi(),
    }
}

/// Swagger UI at `/docs`, document at `/api-docs/openapi.json`.
pub fn swagger(kind: ServiceKind) -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", api_doc(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_cover_their_routes() {
        let games = api_doc(ServiceKind::Games);
        assert_eq!(games.info.title, "Game Data API");
        assert!(games.paths.paths.contains_key("/games"));

        let base = api_doc(ServiceKind::Items);
        assert!(!base.paths.paths.contains_key("/items"));
        let extended = api_doc(ServiceKind::ItemsExtended);
        assert!(extended.paths.paths.contains_key("/items"));

        let tasks = api_doc(ServiceKind::Tasks);
        assert!(tasks.paths.paths.contains_key("/tasks/{id}/complete"));
    }
}
